use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }

        if !*print_config && !*edit_config {
            messages::info(format!(
                "Configuration file: {}",
                Config::config_file().display()
            ));
        }
    }

    Ok(())
}

fn edit(requested: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist, run `rattendance init` first",
            path.display()
        )));
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {
            messages::success(format!("Configuration file edited using '{}'", editor));
            Ok(())
        }
        _ if editor != default_editor => {
            messages::warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor, default_editor
            ));
            match Command::new(&default_editor).arg(&path).status() {
                Ok(s) if s.success() => {
                    messages::success(format!(
                        "Configuration file edited using fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                }
                _ => Err(AppError::Config(format!(
                    "failed to edit configuration file using '{}'",
                    default_editor
                ))),
            }
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            editor
        ))),
    }
}
