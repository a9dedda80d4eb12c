// ABOUTME: App shell — renders usage on help, otherwise drives the factory.
// ABOUTME: All output happens here; the core stays silent.

use crate::connectors;
use crate::options::{schema, AppOptions};

/// Thin shell around one resolved invocation.
pub struct App {
    options: AppOptions,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        Self { options }
    }

    /// When help was signalled, print usage and stop; the factory is never
    /// invoked. Otherwise validate, build the chat client, and report it.
    pub async fn run(self) -> anyhow::Result<()> {
        if self.options.help {
            print!("{}", usage());
            return Ok(());
        }

        let client = connectors::create_chat_client(&self.options).await?;
        println!(
            "The {} connector created with model: {}",
            client.connector_type(),
            client.model()
        );
        Ok(())
    }
}

/// Usage text listing every recognized flag, grouped by connector family.
pub fn usage() -> String {
    let mut out = String::from("Usage: openchat [options]\n");
    out.push_str("\nSelect a connector via the ConnectorType configuration key,\n");
    out.push_str("then override its settings from the command line:\n");
    for family in schema::ALL {
        out.push_str(&format!("\n  {}:\n", family.connector));
        for field in family.fields {
            out.push_str(&format!("    {} <value>\n", field.flag));
        }
    }
    out
}
