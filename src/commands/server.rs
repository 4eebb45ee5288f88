use crate::config::{load_servers_config, save_servers_config, AuthConfig, ServerConfig};
use anyhow::{anyhow, Result};
use clap::Subcommand;
use dialoguer::Select;
use std::io::{stdin, stdout, Write};

#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// List configured servers
    List,
    /// Add a server interactively
    Add,
    /// Remove a server by ID
    Remove { server_id: String },
    /// Make a server the default
    Use { server_id: String },
}

fn prompt(msg: &str) -> Result<String> {
    print!("{msg}: ");
    stdout().flush()?;
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    let val = input.trim().to_string();
    if val.is_empty() {
        Err(anyhow!("{} cannot be empty", msg))
    } else {
        Ok(val)
    }
}

pub async fn run(cmd: ServerCommands) -> Result<()> {
    let mut servers = load_servers_config()?;

    match cmd {
        ServerCommands::List => {
            if servers.servers.is_empty() {
                println!("(no servers configured)");
            } else {
                for s in &servers.servers {
                    let marker = if s.default { " (default)" } else { "" };
                    println!(" - {}{} → {} (auth={:?})", s.server_id, marker, s.url, s.auth);
                }
            }
        }
        ServerCommands::Add => {
            let server_id = prompt("Server ID")?;
            if servers.find(&server_id).is_some() {
                return Err(anyhow!("server '{}' already exists", server_id));
            }
            let url = prompt("Platform URL")?;

            let auth_options = vec!["accessToken", "basic", "none"];
            let selection = Select::new()
                .with_prompt("Auth type")
                .items(&auth_options)
                .default(0)
                .interact()?;

            let auth = match auth_options[selection] {
                "none" => AuthConfig::None,
                "basic" => AuthConfig::Basic {
                    username: prompt("Username")?,
                    password_env: prompt("Password env var")?,
                },
                "accessToken" => AuthConfig::AccessToken {
                    token_env: prompt("Access token env var")?,
                },
                other => return Err(anyhow!("unknown auth type '{}'", other)),
            };
            let default = servers.servers.is_empty();
            servers.servers.push(ServerConfig {
                server_id: server_id.clone(),
                url,
                artifactory_url: None,
                auth,
                default,
            });
            save_servers_config(&servers)?;
            println!("✅ Added server '{server_id}' successfully");
        }
        ServerCommands::Remove { server_id } => {
            let before = servers.servers.len();
            servers.servers.retain(|s| s.server_id != server_id);
            if servers.servers.len() == before {
                println!("no such server '{server_id}'");
            } else {
                save_servers_config(&servers)?;
                println!("removed '{server_id}'");
            }
        }
        ServerCommands::Use { server_id } => {
            if servers.find(&server_id).is_none() {
                return Err(anyhow!("server '{}' is not configured", server_id));
            }
            for s in &mut servers.servers {
                s.default = s.server_id == server_id;
            }
            save_servers_config(&servers)?;
            println!("using '{server_id}' as the default server");
        }
    }

    Ok(())
}
