//! Prompt construction for chart readings
//!
//! The service gets the chart in plain text and is asked for three
//! labelled lines that `parser::parse_answer` can pick apart.

use crate::chart::Chart;
use crate::core::types::Position;

/// Instructions sent ahead of every chart
pub const SYSTEM_PROMPT: &str = r#"You are a professional Zi Ping Bazi (Four Pillars of Destiny) expert. Analyze the Bazi chart you are given and answer the user's YES/NO question.

Please provide:
1. A binary verdict: YES, NO, or NOT NOW (only one word)
2. A classic English poem verse that matches the verdict mood
3. A 2-sentence teaser analysis that explains the verdict

Format your response exactly as:
VERDICT: [YES/NO/NOT NOW]
VERSE: "[poem verse]"
TEASER: [first sentence] [second sentence]
"#;

/// Chart and question as the user turn
pub fn format_chart_prompt(chart: &Chart, question: &str) -> String {
    let mut lines = Vec::with_capacity(10);
    lines.push(format!("GENDER: {}", chart.gender));
    lines.push(String::new());
    lines.push("BAZI CHART:".to_string());
    for position in Position::ALL {
        let pillar = chart.pillar(position);
        lines.push(format!(
            "- {} Pillar: {} {} ({})",
            capitalize(&position.to_string()),
            pillar.stem,
            pillar.branch,
            pillar.element
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "DAY MASTER: {} ({})",
        chart.day_master.stem, chart.day_master.element
    ));
    lines.push(String::new());
    lines.push(format!("USER QUESTION: {}", question.trim()));
    lines.join("\n")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
