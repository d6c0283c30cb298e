use super::prompts;
use crate::commands::AppContext;
use crate::output::{new_table, Output};
use crate::ProfileCommands;
use catalog_core::{delete_account, ProfileStore, SettingsStore};
use catalog_models::{SettingFlag, Settings, UserProfile};
use color_eyre::Result;
use comfy_table::Cell;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_profile(ctx: &AppContext, cmd: ProfileCommands, output: &Output) -> Result<()> {
    let profiles = ProfileStore::new(ctx.storage.clone(), &ctx.keys);
    let settings = SettingsStore::new(ctx.storage.clone(), &ctx.keys);
    let notifier = ctx.notifier(output);

    match cmd {
        ProfileCommands::Show => show_profile(&profiles.load(), output),
        ProfileCommands::Edit {
            name,
            email,
            phone,
            location,
            bio,
        } => {
            let interactive = name.is_none() && email.is_none() && phone.is_none() && location.is_none() && bio.is_none();
            let current = profiles.load();

            let edits = if interactive {
                ProfileEdits {
                    name: Some(prompts::prompt_string("Name", &current.name)?),
                    email: Some(prompts::prompt_string("Email", &current.email)?),
                    phone: Some(prompts::prompt_string("Phone", &current.phone)?),
                    location: Some(prompts::prompt_string("Location", &current.location)?),
                    bio: Some(prompts::prompt_string("Bio", &current.bio)?),
                }
            } else {
                ProfileEdits {
                    name,
                    email,
                    phone,
                    location,
                    bio,
                }
            };

            let updated = profiles.update(|profile| edits.apply(profile), &notifier)?;
            output.result(&json!({ "profile": updated }));
            Ok(())
        }
        ProfileCommands::Avatar { uri } => {
            let updated = profiles.set_avatar(&uri, &notifier)?;
            output.result(&json!({ "profile": updated }));
            Ok(())
        }
        ProfileCommands::Settings => show_settings(&settings.load(), output),
        ProfileCommands::Set { flag, enabled } => {
            let flag: SettingFlag = flag.parse().map_err(|e: String| color_eyre::eyre::eyre!(e))?;
            let updated = settings.set_flag(flag, enabled, &notifier)?;
            output.result(&json!({ "settings": updated }));
            Ok(())
        }
        ProfileCommands::Language { code } => {
            let updated = settings.set_language(&code, &notifier)?;
            output.result(&json!({ "settings": updated }));
            Ok(())
        }
        ProfileCommands::DataUsage { mode } => {
            let updated = settings.set_data_usage(&mode, &notifier)?;
            output.result(&json!({ "settings": updated }));
            Ok(())
        }
        ProfileCommands::DeleteAccount { yes } => {
            if !yes {
                output.warn("This removes your profile, settings and watchlist. Search history and My List are kept.");
                if !prompts::confirm("Delete your account?", false)? {
                    output.info("Account left unchanged");
                    return Ok(());
                }
            }
            delete_account(ctx.storage.as_ref(), &ctx.keys, &notifier)?;
            Ok(())
        }
    }
}

/// Fields given on the command line; `None` keeps the stored value.
struct ProfileEdits {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    bio: Option<String>,
}

impl ProfileEdits {
    fn apply(self, profile: &mut UserProfile) {
        let fields = [
            (self.name, &mut profile.name),
            (self.email, &mut profile.email),
            (self.phone, &mut profile.phone),
            (self.location, &mut profile.location),
            (self.bio, &mut profile.bio),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

fn show_profile(profile: &UserProfile, output: &Output) -> Result<()> {
    if !output.is_human() {
        output.json(&json!({ "profile": profile }));
        return Ok(());
    }

    let mut table = new_table(vec!["Profile", ""]);
    let avatar = if profile.avatar.is_empty() { "(none)" } else { profile.avatar.as_str() };
    for (label, value) in [
        ("Name", profile.name.as_str()),
        ("Email", profile.email.as_str()),
        ("Phone", profile.phone.as_str()),
        ("Location", profile.location.as_str()),
        ("Bio", profile.bio.as_str()),
        ("Avatar", avatar),
        ("Member Since", profile.member_since.as_str()),
        ("Subscription", profile.subscription.as_str()),
        ("Watch Time", profile.watch_time.as_str()),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    output.table(&table);
    Ok(())
}

fn show_settings(settings: &Settings, output: &Output) -> Result<()> {
    if !output.is_human() {
        output.json(&json!({ "settings": settings }));
        return Ok(());
    }

    let mut table = new_table(vec!["Setting", "Value"]);
    for flag in SettingFlag::ALL {
        let value = if settings.flag(flag) { "✓".green().to_string() } else { "✗".red().to_string() };
        table.add_row(vec![Cell::new(flag), Cell::new(value)]);
    }
    table.add_row(vec![Cell::new("dataUsage"), Cell::new(&settings.data_usage)]);
    table.add_row(vec![Cell::new("language"), Cell::new(&settings.language)]);
    output.table(&table);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{memory_context, quiet_output};
    use catalog_core::{KeyValueStore, WatchlistStore};

    #[test]
    fn test_edit_with_flags_keeps_other_fields() {
        let ctx = memory_context();
        let output = quiet_output();

        run_profile(
            &ctx,
            ProfileCommands::Edit {
                name: Some("Sam Rivera".to_string()),
                email: None,
                phone: None,
                location: Some("Austin, TX".to_string()),
                bio: None,
            },
            &output,
        )
        .unwrap();

        let profile = ProfileStore::new(ctx.storage.clone(), &ctx.keys).load();
        assert_eq!(profile.name, "Sam Rivera");
        assert_eq!(profile.location, "Austin, TX");
        assert_eq!(profile.email, UserProfile::default().email);
    }

    #[test]
    fn test_set_rejects_unknown_flag() {
        let ctx = memory_context();
        let output = quiet_output();
        let cmd = ProfileCommands::Set {
            flag: "darkMode".to_string(),
            enabled: true,
        };
        assert!(run_profile(&ctx, cmd, &output).is_err());

        let cmd = ProfileCommands::Set {
            flag: "high-quality".to_string(),
            enabled: false,
        };
        run_profile(&ctx, cmd, &output).unwrap();
        assert!(!SettingsStore::new(ctx.storage.clone(), &ctx.keys).load().high_quality);
    }

    #[test]
    fn test_delete_account_with_yes() {
        let ctx = memory_context();
        let output = quiet_output();
        WatchlistStore::new(ctx.storage.clone(), &ctx.keys).toggle(3).unwrap();
        ctx.storage.set(&ctx.keys.search_history, r#"["dune"]"#).unwrap();

        run_profile(&ctx, ProfileCommands::DeleteAccount { yes: true }, &output).unwrap();

        assert!(ctx.storage.get(&ctx.keys.watchlist).unwrap().is_none());
        assert!(ctx.storage.get(&ctx.keys.search_history).unwrap().is_some());
    }
}
