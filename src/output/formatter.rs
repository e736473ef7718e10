use std::io::IsTerminal;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::inventory::AuditLevel;
use crate::scoring::{RiskLevel, ScoringResult};

/// Everything the text report needs besides the scoring result itself.
pub struct ReportContext<'a> {
    pub athlete: Option<&'a str>,
    pub level: AuditLevel,
    pub generated_on: NaiveDate,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to 80 for pipes
fn get_wrap_width() -> usize {
    terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(80)
}

/// Render a score as a ten-segment bar: "[####------] 42/100"
pub fn format_score_bar(score: u8) -> String {
    let filled = (score as usize) / 10;
    format!(
        "[{}{}] {:>3}/100",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        score
    )
}

/// Wrap text at word boundaries to fit a width, indenting continuation
/// lines to align under a leading bullet.
fn wrap_bullet(text: &str, width: usize) -> String {
    let indent = "    ";
    let usable = width.saturating_sub(indent.len()).max(20);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > usable {
            lines.push(current);
            current = String::new();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("  - {}", line)
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn risk_level_line(level: RiskLevel, use_colors: bool) -> String {
    if use_colors {
        match level {
            RiskLevel::Low => format!("Risk level: {}", "LOW".green().bold()),
            RiskLevel::Medium => format!("Risk level: {}", "MEDIUM".yellow().bold()),
            RiskLevel::High => format!("Risk level: {}", "HIGH".red().bold()),
        }
    } else {
        format!("Risk level: {}", level)
    }
}

/// Format the full audit report as multi-section text.
pub fn format_report(result: &ScoringResult, ctx: &ReportContext, use_colors: bool) -> String {
    let width = get_wrap_width();
    let mut out = Vec::new();

    let title = match ctx.athlete {
        Some(name) => format!("Social Media Presence Audit - {}", name),
        None => "Social Media Presence Audit".to_string(),
    };
    if use_colors {
        out.push(format!("{}", title.bold()));
    } else {
        out.push(title);
    }
    out.push(format!(
        "Level: {}  |  Generated: {}",
        ctx.level,
        ctx.generated_on.format("%Y-%m-%d")
    ));
    out.push(String::new());

    out.push(format!("Overall     {}", format_score_bar(result.overall_score)));
    out.push(format!(
        "Diversity   {}",
        format_score_bar(result.platform_diversity_score)
    ));
    out.push(format!(
        "Volume      {}",
        format_score_bar(result.account_volume_score)
    ));
    out.push(format!(
        "Consistency {}",
        format_score_bar(result.consistency_score)
    ));
    out.push(String::new());

    out.push(format!(
        "{} active platform(s), {} handle(s) total",
        result.active_platform_count, result.total_handle_count
    ));
    out.push(risk_level_line(result.risk_level, use_colors));

    if !result.per_platform.is_empty() {
        out.push(String::new());
        out.push(section_header("Platforms", use_colors));
        for (platform, analysis) in &result.per_platform {
            let line = format!(
                "  {:<12} {} account(s), priority: {}",
                platform.label(),
                analysis.account_count,
                analysis.priority
            );
            out.push(line);
            out.push(format!("               {}", analysis.insight));
        }
    }

    if !result.risks.is_empty() {
        out.push(String::new());
        out.push(section_header("Risks", use_colors));
        for risk in &result.risks {
            out.push(wrap_bullet(risk, width));
        }
    }

    if !result.insights.is_empty() {
        out.push(String::new());
        out.push(section_header("Insights", use_colors));
        for insight in &result.insights {
            out.push(wrap_bullet(insight, width));
        }
    }

    if !result.recommendations.is_empty() {
        out.push(String::new());
        out.push(section_header("Recommendations", use_colors));
        for recommendation in &result.recommendations {
            out.push(wrap_bullet(recommendation, width));
        }
    }

    out.join("\n")
}

fn section_header(name: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}", name.cyan().bold())
    } else {
        name.to_string()
    }
}

/// Serialize the scoring result as pretty JSON for scripting.
pub fn format_json(result: &ScoringResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{HandleInventory, PlatformId};
    use crate::scoring::{score, ScoringConfig};

    fn sample_result() -> ScoringResult {
        let mut inventory = HandleInventory::new();
        inventory.add(PlatformId::Instagram, "@jordan");
        inventory.add(PlatformId::Twitch, "@jordangames");
        score(&inventory, &ScoringConfig::default(), AuditLevel::Standard).unwrap()
    }

    fn sample_ctx() -> ReportContext<'static> {
        ReportContext {
            athlete: Some("Jordan Example"),
            level: AuditLevel::Standard,
            generated_on: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_score_bar_empty() {
        assert_eq!(format_score_bar(0), "[----------]   0/100");
    }

    #[test]
    fn test_score_bar_full() {
        assert_eq!(format_score_bar(100), "[##########] 100/100");
    }

    #[test]
    fn test_score_bar_partial() {
        assert_eq!(format_score_bar(42), "[####------]  42/100");
    }

    #[test]
    fn test_report_contains_sections() {
        let report = format_report(&sample_result(), &sample_ctx(), false);
        assert!(report.contains("Jordan Example"));
        assert!(report.contains("Level: standard"));
        assert!(report.contains("Generated: 2026-03-14"));
        assert!(report.contains("Overall"));
        assert!(report.contains("Risk level: LOW"));
        assert!(report.contains("Platforms"));
        assert!(report.contains("Instagram"));
        assert!(report.contains("Risks"));
        assert!(report.contains("Gaming platforms"));
        assert!(report.contains("Recommendations"));
    }

    #[test]
    fn test_report_without_athlete_name() {
        let ctx = ReportContext {
            athlete: None,
            ..sample_ctx()
        };
        let report = format_report(&sample_result(), &ctx, false);
        assert!(report.starts_with("Social Media Presence Audit\n"));
    }

    #[test]
    fn test_empty_result_omits_list_sections() {
        let result = score(
            &HandleInventory::new(),
            &ScoringConfig::default(),
            AuditLevel::Standard,
        )
        .unwrap();
        let report = format_report(&result, &sample_ctx(), false);
        assert!(!report.contains("Risks"));
        assert!(!report.contains("Insights"));
        assert!(!report.contains("Recommendations"));
        assert!(report.contains("0 active platform(s)"));
        assert!(report.contains("Consistency [#####-----]  50/100"));
    }

    #[test]
    fn test_no_color_output_has_no_escapes() {
        let report = format_report(&sample_result(), &sample_ctx(), false);
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn test_wrap_bullet_short_line() {
        assert_eq!(wrap_bullet("short text", 80), "  - short text");
    }

    #[test]
    fn test_wrap_bullet_long_line_indents_continuation() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let wrapped = wrap_bullet(text, 40);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("  - "));
        assert!(lines[1].starts_with("    "));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_result()).unwrap();
        assert!(json.contains("\"overall_score\""));
        assert!(json.contains("\"risk_level\": \"LOW\""));
        let parsed: ScoringResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_result());
    }
}
