//! Audit command implementation.
//!
//! Reads one component source file, parses it into the element model, runs
//! the rule registry over the tree, prints the result, and optionally
//! exports a report file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::audit::{
    audit, AuditResult, HumanFormatter, JsonFormatter, MarkdownFormatter, ReportFormat,
    ReportFormatter, RuleRegistry,
};
use crate::cli::args::AuditArgs;
use crate::error::{Result, UxrayError};
use crate::markup::MarkupParser;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The audit command implementation.
pub struct AuditCommand {
    file: PathBuf,
    args: AuditArgs,
}

impl AuditCommand {
    /// Create a new audit command.
    pub fn new(file: &Path, args: AuditArgs) -> Self {
        Self {
            file: file.to_path_buf(),
            args,
        }
    }

    /// Build the rule registry for this run, applying `--disable`.
    fn build_registry(&self, ui: &mut dyn UserInterface) -> RuleRegistry {
        let mut registry = RuleRegistry::with_builtins();
        for name in &self.args.disable {
            if !registry.disable(name) {
                ui.warning(&format!("Unknown rule: {}", name));
            }
        }
        registry
    }

    /// Print the result to the terminal, routing lines by severity prefix.
    fn print_result(&self, result: &AuditResult, ui: &mut dyn UserInterface) {
        let mut rendered = Vec::new();
        HumanFormatter::new().format(result, &mut rendered).ok();
        let rendered = String::from_utf8(rendered).unwrap_or_default();

        for line in rendered.lines() {
            if line.starts_with("error") {
                ui.error(line);
            } else if line.starts_with("warn") || line.starts_with("info") {
                ui.warning(line);
            } else {
                ui.message(line);
            }
        }

        if result.violations.is_empty() {
            ui.success("No violations found!");
        }
    }

    /// Write the report file in the requested format.
    fn export(&self, result: &AuditResult, format: ReportFormat, path: &Path) -> Result<()> {
        let export_err = |e: std::io::Error| UxrayError::ExportError {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let file = File::create(path).map_err(export_err)?;
        let mut writer = BufWriter::new(file);
        match format {
            ReportFormat::Json => JsonFormatter::new().format(result, &mut writer),
            ReportFormat::Markdown => MarkdownFormatter::new().format(result, &mut writer),
        }
        .map_err(export_err)?;
        writer.flush().map_err(export_err)?;
        Ok(())
    }
}

impl Command for AuditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Resolve the report format up front so a bad --report value fails
        // before any work is done.
        let report_format = match &self.args.report {
            Some(format) => Some(format.parse::<ReportFormat>().map_err(|_| {
                UxrayError::UnknownFormat {
                    format: format.clone(),
                }
            })?),
            None => None,
        };

        let source = fs::read_to_string(&self.file).map_err(|e| UxrayError::FileRead {
            path: self.file.clone(),
            message: e.to_string(),
        })?;

        let mut parser = MarkupParser::new()?;
        let roots = parser.parse(&source, &self.file)?;

        let registry = self.build_registry(ui);
        let result = audit(&roots, &source, &registry);

        ui.show_header(&format!("UX Audit Report for {}", self.file.display()));
        self.print_result(&result, ui);

        // Export after printing: a failing export surfaces as an error but
        // never discards the already-reported result.
        if let Some(format) = report_format {
            let out_path = self.args.out.clone().unwrap_or_else(|| {
                PathBuf::from(format!("uxray-report.{}", format.extension()))
            });
            self.export(&result, format, &out_path)?;
            ui.success(&format!("Report exported to: {}", out_path.display()));
        }

        if self.args.strict && result.has_errors() {
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn write_component(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn audit_clean_component_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" alt="Logo" />;"#,
        );
        let cmd = AuditCommand::new(&path, AuditArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|m| m.contains("No violations")));
    }

    #[test]
    fn audit_reports_missing_alt() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" />;"#,
        );
        let cmd = AuditCommand::new(&path, AuditArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        // Violations alone never fail the run.
        assert!(result.success);
        assert!(ui.errors().iter().any(|m| m.contains("missing-alt")));
    }

    #[test]
    fn strict_mode_fails_on_error_severity() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" />;"#,
        );
        let args = AuditArgs {
            strict: true,
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn strict_mode_passes_on_warnings_only() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Nav.tsx",
            r#"export const Nav = () => <a>Home</a>;"#,
        );
        let args = AuditArgs {
            strict: true,
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.warnings().iter().any(|m| m.contains("anchor-without-href")));
    }

    #[test]
    fn disable_removes_rule_and_its_findings() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" />;"#,
        );
        let args = AuditArgs {
            disable: vec!["missing-alt".to_string()],
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(!ui.output_contains("missing-alt"));
        assert!(ui.output_contains("10 of 10 checks passed"));
    }

    #[test]
    fn unknown_disable_name_warns_but_continues() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" alt="ok" />;"#,
        );
        let args = AuditArgs {
            disable: vec!["no-such-rule".to_string()],
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.warnings().iter().any(|m| m.contains("no-such-rule")));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let cmd = AuditCommand::new(Path::new("/nonexistent/App.tsx"), AuditArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, UxrayError::FileRead { .. }));
    }

    #[test]
    fn unparsable_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_component(&temp, "Broken.tsx", "const App = () => <div");
        let cmd = AuditCommand::new(&path, AuditArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, UxrayError::ParseError { .. }));
    }

    #[test]
    fn bad_report_format_fails_before_auditing() {
        let cmd = AuditCommand::new(
            Path::new("/nonexistent/App.tsx"),
            AuditArgs {
                report: Some("xml".to_string()),
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        // UnknownFormat, not FileRead: the format is validated first.
        assert!(matches!(err, UxrayError::UnknownFormat { .. }));
    }

    #[test]
    fn exports_json_report_to_default_path() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" />;"#,
        );
        let out = temp.path().join("report.json");
        let args = AuditArgs {
            report: Some("json".to_string()),
            out: Some(out.clone()),
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(report["totalChecks"], 11);
        assert_eq!(report["violations"][0]["name"], "missing-alt");
        assert!(ui.successes().iter().any(|m| m.contains("Report exported")));
    }

    #[test]
    fn exports_markdown_report() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" alt="ok" />;"#,
        );
        let out = temp.path().join("report.md");
        let args = AuditArgs {
            report: Some("md".to_string()),
            out: Some(out.clone()),
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let report = fs::read_to_string(&out).unwrap();
        assert!(report.starts_with("# UXRay Audit Report"));
        assert!(report.contains("✅ No violations found!"));
    }

    #[test]
    fn export_failure_surfaces_after_result_is_printed() {
        let temp = TempDir::new().unwrap();
        let path = write_component(
            &temp,
            "Card.tsx",
            r#"export const Card = () => <img src="x.png" />;"#,
        );
        let args = AuditArgs {
            report: Some("json".to_string()),
            out: Some(temp.path().join("missing-dir").join("report.json")),
            ..Default::default()
        };
        let cmd = AuditCommand::new(&path, args);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, UxrayError::ExportError { .. }));
        // The result was still reported before the export failed.
        assert!(ui.errors().iter().any(|m| m.contains("missing-alt")));
    }
}
