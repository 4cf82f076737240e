use clap::{Args, Subcommand};
use serde::Serialize;
use tillpoint_sdk::{Client, ListParams};
use tracing::debug;

/// Pagination flags shared by every `list` command
#[derive(Args, PartialEq, Clone, Debug, Default)]
pub struct ListArgs {
    /// Number of objects to return, between 1 and 100
    #[arg(long = "limit", short = 'l')]
    pub limit: Option<u32>,

    /// Return objects listed after this ID
    #[arg(long = "starting-after", conflicts_with = "ending_before")]
    pub starting_after: Option<String>,

    /// Return objects listed before this ID
    #[arg(long = "ending-before")]
    pub ending_before: Option<String>,
}

impl ListArgs {
    pub fn to_params(&self) -> ListParams {
        ListParams {
            limit: self.limit,
            ending_before: self.ending_before.clone(),
            starting_after: self.starting_after.clone(),
        }
    }
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
pub enum CustomersCommand {
    /// List customers, newest first
    List(ListArgs),
    /// Show one customer
    Get { id: String },
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
pub enum ChargesCommand {
    /// List charges, optionally for one customer
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only charges made against this customer
        #[arg(long = "customer", short = 'c')]
        customer: Option<String>,
    },
    /// Show one charge
    Get { id: String },
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
pub enum PlansCommand {
    /// List plans
    List(ListArgs),
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
pub enum CouponsCommand {
    /// List coupons
    List(ListArgs),
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
pub enum InvoicesCommand {
    /// List invoices, optionally for one customer
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only invoices billed to this customer
        #[arg(long = "customer", short = 'c')]
        customer: Option<String>,
    },
    /// Preview the next invoice of a customer
    Upcoming { customer: String },
}

impl CustomersCommand {
    pub async fn execute(&self, client: &Client) -> anyhow::Result<()> {
        match self {
            CustomersCommand::List(list) => {
                print_json(&client.customers().list(&list.to_params()).await?)
            }
            CustomersCommand::Get { id } => print_json(&client.customers().retrieve(id).await?),
        }
    }
}

impl ChargesCommand {
    pub async fn execute(&self, client: &Client) -> anyhow::Result<()> {
        match self {
            ChargesCommand::List {
                list,
                customer: Some(customer),
            } => print_json(
                &client
                    .charges()
                    .list_for_customer(customer, &list.to_params())
                    .await?,
            ),
            ChargesCommand::List {
                list,
                customer: None,
            } => print_json(&client.charges().list(&list.to_params()).await?),
            ChargesCommand::Get { id } => print_json(&client.charges().retrieve(id).await?),
        }
    }
}

impl PlansCommand {
    pub async fn execute(&self, client: &Client) -> anyhow::Result<()> {
        match self {
            PlansCommand::List(list) => print_json(&client.plans().list(&list.to_params()).await?),
        }
    }
}

impl CouponsCommand {
    pub async fn execute(&self, client: &Client) -> anyhow::Result<()> {
        match self {
            CouponsCommand::List(list) => {
                print_json(&client.coupons().list(&list.to_params()).await?)
            }
        }
    }
}

impl InvoicesCommand {
    pub async fn execute(&self, client: &Client) -> anyhow::Result<()> {
        match self {
            InvoicesCommand::List {
                list,
                customer: Some(customer),
            } => print_json(
                &client
                    .invoices()
                    .list_for_customer(customer, &list.to_params())
                    .await?,
            ),
            InvoicesCommand::List {
                list,
                customer: None,
            } => print_json(&client.invoices().list(&list.to_params()).await?),
            InvoicesCommand::Upcoming { customer } => {
                print_json(&client.invoices().upcoming(customer).await?)
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    debug!(bytes = rendered.len(), "Rendered response");
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_to_params() {
        let args = ListArgs {
            limit: Some(50),
            starting_after: Some("cus_9".to_string()),
            ending_before: None,
        };
        let params = args.to_params();
        assert_eq!(params.limit, Some(50));
        assert_eq!(params.starting_after.as_deref(), Some("cus_9"));
        assert_eq!(params.ending_before, None);

        assert_eq!(ListArgs::default().to_params(), ListParams::new());
    }
}
