//! Example walking the Upwork authorization flow and sending a GraphQL query.
//!
//! Run with:
//! ```
//! UPWORK_CLIENT_ID=xxx UPWORK_CLIENT_SECRET=xxx UPWORK_REDIRECT_URI=https://example.com/cb \
//!     cargo run --example graphql_demo
//! ```
//!
//! When `UPWORK_ACCESS_TOKEN` and `UPWORK_REFRESH_TOKEN` are set the known pair
//! is used (and refreshed if expired); otherwise the authorization URL is
//! printed and the code is read from stdin. Set `UPWORK_TENANT_ID` to send the
//! organization header, `UPWORK_API_DEBUG=1` for request logging.

use integrations_upwork::{upwork_config, Graphql, Params, TokenPair, UpworkApi};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const USER_QUERY: &str = r#"query {
  user {
    id
    nid
    rid
  }
  organization {
    id
  }
}"#;

fn read_code(url: &str) -> io::Result<String> {
    print!("Please, visit {} and enter the authorization code: ", url);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_pair(label: &str, pair: &TokenPair) {
    // Never print the tokens themselves.
    println!(
        "{}: refresh token present: {}, expires at: {}",
        label,
        pair.has_refresh_token(),
        pair.expires_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string())
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("integrations_upwork=debug")),
        )
        .with_target(false)
        .init();

    let config = upwork_config().from_env().build()?;
    let has_known_pair = config.access_token.is_some() && config.refresh_token.is_some();
    let api = UpworkApi::new(config)?;

    if let Ok(tenant_id) = std::env::var("UPWORK_TENANT_ID") {
        api.set_org_uid_header(Some(tenant_id));
    }

    if has_known_pair {
        let before = api.client().config().access_token;
        let pair = api.set_access_token().await?;
        if before.as_deref() != Some(pair.access_token.as_str()) {
            println!("The access token was refreshed; store the new pair safely.");
        }
        print_pair("Known token pair", &pair);
    } else {
        let url = api.authorization_url()?;
        let code = read_code(&url)?;
        let pair = api.get_token(&code).await?;
        // Store the pair somewhere safe before using it.
        let pair = api.set_new_access_token_pair(pair);
        print_pair("New token pair", &pair);
    }

    let graphql = Graphql::new(&api);
    let response = graphql
        .execute(Params::new().with("query", USER_QUERY))
        .await?;

    println!("HTTP {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    Ok(())
}
