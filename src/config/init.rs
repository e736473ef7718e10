use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::inventory::{AuditLevel, HandleInventory, InventoryFile, PlatformId};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Run the interactive wizard that builds an inventory file.
///
/// Collects athlete name, an audit level, and per-platform handle lists,
/// then writes the YAML inventory to `path` (default: ./inventory.yaml).
pub fn run_init_wizard(path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Presence Audit - Inventory Setup");
    println!("================================");
    println!();

    let athlete = prompt("Athlete name (blank to skip): ")?;
    let athlete = if athlete.is_empty() { None } else { Some(athlete) };

    println!();
    println!("Audit levels:");
    println!("  quick              -- core platform-gap insights only");
    println!("  standard           -- adds recruitment-tone notes");
    println!("  deep-dive          -- adds handle verification notes");
    println!("  recruitment-ready  -- everything, recruiter-focused");
    let level = loop {
        let input = prompt_with_default("Audit level", "standard")?;
        match input.parse::<AuditLevel>() {
            Ok(level) => break level,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    println!("Now add handles per platform. Known platforms: instagram, tiktok,");
    println!("twitter/x, youtube, linkedin, snapchat, facebook, twitch, discord,");
    println!("threads, bereal, vsco. Anything else is scored with a default weight.");
    println!();

    let mut handles = HandleInventory::new();
    loop {
        let platform_key = loop {
            let p = prompt("Platform: ")?;
            if !p.is_empty() {
                break p;
            }
            println!("  Platform is required.");
        };
        let platform = PlatformId::from_key(&platform_key);

        loop {
            let handle = loop {
                let h = prompt(&format!("  Handle on {}: ", platform.label()))?;
                if !h.is_empty() {
                    break h;
                }
                println!("  Handle is required.");
            };
            handles.add(platform.clone(), handle);

            let more = prompt_yes_no(&format!("  Add another {} handle?", platform.label()), false)?;
            if !more {
                break;
            }
        }

        let another_platform = prompt_yes_no("Add another platform?", true)?;
        if !another_platform {
            break;
        }
        println!();
    }

    let default_path = path.unwrap_or_else(|| PathBuf::from("inventory.yaml"));
    println!();
    let path_str = prompt_with_default(
        "Where should the inventory be saved?",
        &default_path.display().to_string(),
    )?;
    let inventory_path = PathBuf::from(&path_str);

    if inventory_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Inventory already exists at {}. Overwrite?",
                inventory_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let inventory = InventoryFile {
        athlete,
        level: Some(level.to_string()),
        handles,
    };

    let yaml = serde_saphyr::to_string(&inventory)
        .map_err(|e| anyhow::anyhow!("Failed to serialize inventory: {}", e))?;

    if let Some(parent) = inventory_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    std::fs::write(&inventory_path, &yaml)
        .with_context(|| format!("Failed to write inventory to {}", inventory_path.display()))?;

    println!();
    println!("Inventory written to {}", inventory_path.display());
    println!("Run `presence-audit audit {}` to score it.", inventory_path.display());

    Ok(())
}
