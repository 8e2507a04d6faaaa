/// Preview — compose a demo post for a theme and goal and print the result.
///
/// Usage: preview [--themes <path>] [--theme <id>] [--goal <goal>] [--type <text|poll|document>]
///
/// Without `--theme`, the first theme recommended for the goal is used.
/// Set `RUST_LOG=debug` to trace variant resolution and composition.

use post_composer::core::theme::{ThemeRegistry, FALLBACK_THEME};
use post_composer::core::tokens;
use post_composer::core::variants::{VariantResolver, VariantSchema};
use post_composer::schema::style::{HashtagPlacement, PostType, SeparatorStyle, Structure};
use post_composer::ComposablePost;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut themes_path = None;
    let mut theme_id = None;
    let mut goal = String::from("authority");
    let mut post_type = PostType::Text;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--themes" if i + 1 < args.len() => {
                i += 1;
                themes_path = Some(args[i].clone());
            }
            "--theme" if i + 1 < args.len() => {
                i += 1;
                theme_id = Some(args[i].clone());
            }
            "--goal" if i + 1 < args.len() => {
                i += 1;
                goal = args[i].clone();
            }
            "--type" if i + 1 < args.len() => {
                i += 1;
                post_type = match args[i].parse() {
                    Ok(t) => t,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                };
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut registry = match ThemeRegistry::with_presets() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load built-in themes: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(ref path) = themes_path {
        match registry.load_from_ron(Path::new(path)) {
            Ok(n) => println!("Loaded {} themes from {}", n, path),
            Err(e) => {
                eprintln!("Failed to load themes from {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    let theme_id = theme_id.unwrap_or_else(|| {
        registry
            .recommend(&goal)
            .first()
            .map(|id| id.to_string())
            .unwrap_or_else(|| FALLBACK_THEME.to_string())
    });
    let theme = match registry.require(&theme_id) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Available themes: {}", registry.names().join(", "));
            std::process::exit(1);
        }
    };

    let schema = VariantSchema::for_post_type(post_type);
    let mut selected = VariantResolver::suggest_variants(post_type, &goal);
    if selected.is_empty() {
        println!("No suggestion for goal '{}'; using schema defaults.", goal);
        selected = schema.default_variant.clone();
    }
    let config = VariantResolver::resolve(&schema, &selected, Some(theme.as_ref()));

    println!("Theme: {} ({})", theme.name, theme.id);
    println!("Post type: {}", post_type);
    println!("Selection: {:?}", selected);
    println!("Resolved config:");
    for (key, value) in config.iter() {
        println!("  {} = {:?}", key, value);
    }

    let mut post = ComposablePost::new(post_type)
        .with_theme(theme)
        .with_config(config);
    post.add_body(
        "Most teams measure output.\n\nThe best ones measure outcomes.",
        None,
    )
    .add_body(
        "Name the outcome||Pick one leading signal||Review it weekly",
        Some(Structure::Framework),
    )
    .add_separator(SeparatorStyle::Line)
    .add_big_stat("3x", "faster course corrections")
    .add_hashtags(["Leadership", "Metrics", "Teams"], HashtagPlacement::End);
    post.optimize_for_engagement();

    match post.summary() {
        Ok(summary) => {
            println!("\n--- Composed Post ({} chars) ---", summary.character_count);
            println!("{}", summary.final_text);
            println!("--- End ---\n");
            println!("Preview ({} chars):", tokens::TRUNCATION_POINT);
            println!("{}\n", summary.preview);
            match ron::ser::to_string_pretty(&summary, ron::ser::PrettyConfig::default()) {
                Ok(text) => println!("Summary:\n{}", text),
                Err(e) => eprintln!("Failed to serialize summary: {}", e),
            }
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: preview [--themes <path>] [--theme <id>] [--goal <goal>] [--type <type>]");
    println!("  --themes <path>  RON file of extra themes to register");
    println!("  --theme <id>     theme to compose with (default: recommended for goal)");
    println!("  --goal <goal>    authority, engagement, virality, community, research, education");
    println!("  --type <type>    text, poll or document (default: text)");
}
