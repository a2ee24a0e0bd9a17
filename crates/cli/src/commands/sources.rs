use super::SettingsArgs;
use credkit_providers::{default_chain, ProviderSettings};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SourcesReport {
    chain: Vec<String>,
    settings: ProviderSettings,
}

pub fn execute(args: &SettingsArgs, json: bool) -> eyre::Result<()> {
    let settings = args.load()?;
    let report = SourcesReport {
        chain: default_chain(&settings)
            .source_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        settings,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&report));
    }
    Ok(())
}

fn render_text(report: &SourcesReport) -> String {
    let credentials_file = report
        .settings
        .credentials_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<no home directory>".to_string());

    let mut lines = Vec::with_capacity(report.chain.len() + 1);
    for (position, name) in report.chain.iter().enumerate() {
        let detail = match name.as_str() {
            "environment" => format!(
                "{} / {}",
                report.settings.identifier_var, report.settings.secret_var
            ),
            "profile" => format!("[{}] in {credentials_file}", report.settings.profile),
            _ => String::new(),
        };
        lines.push(format!("{}. {name:<12} {detail}", position + 1));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_lists_chain_in_order() {
        let settings = ProviderSettings {
            profile: "staging".to_string(),
            credentials_file: Some(PathBuf::from("/etc/credkit/credentials")),
            ..ProviderSettings::default()
        };
        let report = SourcesReport {
            chain: vec!["environment".to_string(), "profile".to_string()],
            settings,
        };

        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. environment"));
        assert!(lines[0].ends_with("AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY"));
        assert!(lines[1].starts_with("2. profile"));
        assert!(lines[1].ends_with("[staging] in /etc/credkit/credentials"));
    }
}
