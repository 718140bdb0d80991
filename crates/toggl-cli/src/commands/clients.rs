//! Clients command: list, create, update, and delete billing clients.

use std::io::Write;

use anyhow::{Context, Result, bail};
use toggl_api::{Client, ClientData, TogglApi, WorkspaceRef};

use crate::ClientsAction;
use crate::commands::util;

/// Runs a clients subcommand.
pub async fn run<W: Write>(writer: &mut W, api: &TogglApi, action: &ClientsAction) -> Result<()> {
    match action {
        ClientsAction::List { verbose_list } => {
            let clients = api.get_clients().await?;
            write!(writer, "{}", render_list(&clients, *verbose_list))?;
        }

        ClientsAction::Add {
            name,
            rate,
            currency,
            workspace,
        } => {
            let workspace = match workspace {
                Some(needle) => {
                    let workspaces = api.get_workspaces().await?;
                    Some(WorkspaceRef::from(util::find_workspace(
                        &workspaces,
                        needle,
                    )?))
                }
                None => None,
            };

            let data = ClientData {
                name: Some(name.clone()),
                hourly_rate: *rate,
                currency: currency.clone(),
                workspace,
            };
            let client = api.create_client(&data).await?;
            writeln!(
                writer,
                "Created client '{}' with id {}",
                client.name, client.id
            )?;
        }

        ClientsAction::Update {
            client,
            name,
            rate,
            currency,
            workspace,
        } => {
            let clients = api.get_clients().await?;
            let target = util::find_client(&clients, client)?;

            let workspace = match workspace {
                Some(needle) => {
                    let workspaces = api.get_workspaces().await?;
                    Some(WorkspaceRef::from(util::find_workspace(
                        &workspaces,
                        needle,
                    )?))
                }
                None => None,
            };

            let data = ClientData {
                name: name.clone(),
                hourly_rate: *rate,
                currency: currency.clone(),
                workspace,
            };
            let updated = api
                .update_client(target.id, &data)
                .await?
                .with_context(|| format!("client {} disappeared during the update", target.id))?;
            writeln!(writer, "Updated client '{}'", updated.name)?;
        }

        ClientsAction::Rm { id } => {
            if !api.delete_client(*id).await? {
                bail!("client {id} does not exist");
            }
            writeln!(writer, "Deleted client {id}")?;
        }
    }

    Ok(())
}

/// Renders the client list with billing details.
pub fn render_list(clients: &[Client], verbose: bool) -> String {
    let mut output = String::new();
    for client in clients {
        let id_part = if verbose {
            format!("[{}] ", client.id)
        } else {
            String::new()
        };
        let workspace = client
            .workspace
            .as_ref()
            .map_or_else(|| "-".to_string(), |w| w.name.clone());
        let rate = client
            .hourly_rate
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        let currency = client.currency.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "* {id_part}{} [Workspace: ({workspace}) Hourly Rate: ({rate}) Currency: ({currency})]\n",
            client.name
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use toggl_api::Workspace;

    fn client(id: u64, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
            hourly_rate: Some(95.0),
            currency: Some("EUR".to_string()),
            workspace: Some(Workspace {
                id: 10,
                name: "Acme".to_string(),
                profile_name: None,
                is_admin: false,
            }),
        }
    }

    #[test]
    fn render_list_shows_billing_details() {
        let output = render_list(&[client(3, "Corp")], false);
        insta::assert_snapshot!(output, @"* Corp [Workspace: (Acme) Hourly Rate: (95) Currency: (EUR)]");
    }

    #[test]
    fn render_list_dashes_missing_fields() {
        let mut bare = client(4, "Solo");
        bare.hourly_rate = None;
        bare.currency = None;
        bare.workspace = None;

        let output = render_list(&[bare], true);
        insta::assert_snapshot!(output, @"* [4] Solo [Workspace: (-) Hourly Rate: (-) Currency: (-)]");
    }
}
