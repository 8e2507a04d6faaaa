/// Text charts built from emoji and box-drawing glyphs.
use indexmap::IndexMap;

use crate::core::component::PostComponent;
use crate::core::features::push_title;
use crate::core::theme::Theme;
use crate::core::tokens;

/// Horizontal bars of colored squares, one square per unit. A bar never
/// grows past what a whole post could hold.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub data: IndexMap<String, u32>,
    pub title: Option<String>,
    pub unit: Option<String>,
}

impl BarChart {
    pub fn new(data: IndexMap<String, u32>) -> Self {
        Self {
            data,
            title: None,
            unit: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl PostComponent for BarChart {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::TIME_GLYPH, self.title.as_deref());

        for (idx, (label, value)) in self.data.iter().enumerate() {
            let color = tokens::BAR_COLORS[idx % tokens::BAR_COLORS.len()];
            let width = usize::try_from(*value)
                .unwrap_or(usize::MAX)
                .min(tokens::MAX_POST_LENGTH);
            let bar = color.repeat(width);
            let value_text = match self.unit.as_deref().filter(|u| !u.is_empty()) {
                Some(unit) => format!("{} {}", value, unit),
                None => value.to_string(),
            };
            lines.push(format!("{} {}: {}", bar, label, value_text));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.data.is_empty()
    }
}

/// KPIs with a positive or negative indicator inferred from wording.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsChart {
    pub data: IndexMap<String, String>,
    pub title: Option<String>,
}

impl MetricsChart {
    pub fn new(data: IndexMap<String, String>) -> Self {
        Self { data, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn indicator(label: &str, value: &str) -> &'static str {
        let label = label.to_lowercase();
        if value.contains('%') || label.contains("increase") || label.contains("growth") {
            tokens::ACCEPT
        } else if label.contains("decrease") || label.contains("down") {
            tokens::REJECT
        } else {
            tokens::ACCEPT
        }
    }
}

impl PostComponent for MetricsChart {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::METRICS_GLYPH, self.title.as_deref());

        for (label, value) in &self.data {
            lines.push(format!(
                "{} {} {} {}",
                Self::indicator(label, value),
                value,
                tokens::ARROW,
                label
            ));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Side-by-side options; every side but the last is framed negatively.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub sides: IndexMap<String, Vec<String>>,
    pub title: Option<String>,
}

impl ComparisonChart {
    pub fn new(sides: IndexMap<String, Vec<String>>) -> Self {
        Self { sides, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PostComponent for ComparisonChart {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::BALANCE_GLYPH, self.title.as_deref());

        if self.sides.len() >= 2 {
            let last = self.sides.len() - 1;
            for (idx, (label, points)) in self.sides.iter().enumerate() {
                let mark = if idx == last {
                    tokens::ACCEPT
                } else {
                    tokens::REJECT
                };
                lines.push(format!("{} {}:", mark, label));
                lines.extend(points.iter().map(|p| format!("  {} {}", tokens::BULLET, p)));
                if idx < last {
                    lines.push(String::new());
                }
            }
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        self.sides.len() >= 2
    }
}

/// Ten-cell progress bars for 0–100 percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressChart {
    pub data: IndexMap<String, u32>,
    pub title: Option<String>,
}

impl ProgressChart {
    pub fn new(data: IndexMap<String, u32>) -> Self {
        Self { data, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PostComponent for ProgressChart {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::STATS_GLYPH, self.title.as_deref());

        let width = self
            .data
            .keys()
            .map(|label| tokens::char_len(label))
            .max()
            .unwrap_or(0);
        for (label, percent) in &self.data {
            let filled = (*percent).min(100) / (100 / tokens::PROGRESS_CELLS);
            let empty = tokens::PROGRESS_CELLS - filled;
            let bar = format!(
                "{}{}",
                tokens::PROGRESS_FILLED.repeat(filled as usize),
                tokens::PROGRESS_EMPTY.repeat(empty as usize)
            );
            lines.push(format!("{:<width$}  {} {}%", label, bar, percent, width = width));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.data.is_empty() && self.data.values().all(|p| *p <= 100)
    }
}

/// Leaderboard, with medals for the top three when enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingChart {
    pub data: IndexMap<String, String>,
    pub title: Option<String>,
    pub show_medals: bool,
}

impl RankingChart {
    pub fn new(data: IndexMap<String, String>) -> Self {
        Self {
            data,
            title: None,
            show_medals: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_medals(mut self, show_medals: bool) -> Self {
        self.show_medals = show_medals;
        self
    }
}

impl PostComponent for RankingChart {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::RANKING_GLYPH, self.title.as_deref());

        for (idx, (label, value)) in self.data.iter().enumerate() {
            let prefix = match tokens::MEDALS.get(idx) {
                Some(medal) if self.show_medals => medal.to_string(),
                _ => format!("{}.", idx + 1),
            };
            lines.push(format!("{} {}: {}", prefix, label, value));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u32)]) -> IndexMap<String, u32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn texts(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn bar_chart_cycles_colors() {
        let chart = BarChart::new(counts(&[("Meetings", 3), ("Coding", 2)])).with_unit("hrs");
        assert_eq!(
            chart.render(None),
            "🟦🟦🟦 Meetings: 3 hrs\n🟩🟩 Coding: 2 hrs"
        );
        assert!(!BarChart::new(IndexMap::new()).validate());
    }

    #[test]
    fn bar_width_is_capped_at_post_length() {
        let chart = BarChart::new(counts(&[("x", u32::MAX)]));
        assert!(chart.validate());
        let rendered = chart.render(None);
        assert_eq!(
            rendered.matches(tokens::BAR_COLORS[0]).count(),
            tokens::MAX_POST_LENGTH
        );
        assert!(rendered.ends_with(" x: 4294967295"));
    }

    #[test]
    fn metrics_indicators() {
        let chart = MetricsChart::new(texts(&[
            ("Revenue growth", "2x"),
            ("Churn down", "3 pts"),
            ("Retention", "94%"),
        ]));
        assert_eq!(
            chart.render(None),
            "✅ 2x → Revenue growth\n❌ 3 pts → Churn down\n✅ 94% → Retention"
        );
    }

    #[test]
    fn comparison_marks_last_side_positive() {
        let mut sides = IndexMap::new();
        sides.insert("Old".to_string(), vec!["Slow".to_string()]);
        sides.insert("New".to_string(), vec!["Fast".to_string(), "Cheap".to_string()]);
        let chart = ComparisonChart::new(sides).with_title("Pipelines");
        assert_eq!(
            chart.render(None),
            "⚖️ PIPELINES:\n\n❌ Old:\n  • Slow\n\n✅ New:\n  • Fast\n  • Cheap"
        );

        let mut lonely = IndexMap::new();
        lonely.insert("Only".to_string(), vec![]);
        assert!(!ComparisonChart::new(lonely).validate());
    }

    #[test]
    fn progress_bars_pad_labels() {
        let chart = ProgressChart::new(counts(&[("API", 80), ("Frontend", 35)]));
        assert_eq!(
            chart.render(None),
            "API       ████████░░ 80%\nFrontend  ███░░░░░░░ 35%"
        );
        assert!(!ProgressChart::new(counts(&[("Over", 120)])).validate());
        assert!(ProgressChart::new(counts(&[("Over", 120)]))
            .render(None)
            .contains("██████████ 120%"));
    }

    #[test]
    fn ranking_medals_toggle() {
        let data = texts(&[("Rust", "1st"), ("Go", "2nd"), ("Zig", "3rd"), ("C", "4th")]);
        let medals = RankingChart::new(data.clone());
        assert_eq!(
            medals.render(None),
            "🥇 Rust: 1st\n🥈 Go: 2nd\n🥉 Zig: 3rd\n4. C: 4th"
        );
        let plain = RankingChart::new(data).with_medals(false);
        assert!(plain.render(None).starts_with("1. Rust: 1st"));
    }
}
