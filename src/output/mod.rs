mod formatter;

pub use formatter::{
    format_json, format_report, format_score_bar, should_use_colors, ReportContext,
};
