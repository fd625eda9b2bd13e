use std::io::Write;

use adv_client::HttpResultFetcher;
use adv_codec::StateDecoder;
use adv_ledger::ResultFetcher;
use adv_server::DevNode;
use adv_state::{present, StateQuery};
use colored::Colorize;

use crate::app::{self, AppState};
use crate::cli::*;
use crate::config::CliConfig;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::resolve(&cli)?;
    match cli.command {
        Command::State(_) => cmd_state(&config).await,
        Command::Serve(args) => cmd_serve(config, args).await,
    }
}

async fn cmd_state(config: &CliConfig) -> anyhow::Result<()> {
    let fetcher = HttpResultFetcher::new(config.node_url.as_str());
    let query = StateQuery::new(fetcher)
        .with_deadline(config.deadline())
        .from_position(config.from);
    write_state(&query, &mut std::io::stdout()).await
}

/// Resolve the latest [`AppState`] through `query`.
pub async fn latest_state<F: ResultFetcher>(query: &StateQuery<F>) -> anyhow::Result<Option<AppState>> {
    let decoder = StateDecoder::<AppState>::new(app::codecs()?)?;
    Ok(query.latest(&decoder).await?)
}

/// Resolve and print the latest state. Nothing is written on failure.
pub async fn write_state<F: ResultFetcher, W: Write>(
    query: &StateQuery<F>,
    out: &mut W,
) -> anyhow::Result<()> {
    let state = latest_state(query).await?;
    present(out, state.as_ref())?;
    Ok(())
}

async fn cmd_serve(config: CliConfig, args: ServeArgs) -> anyhow::Result<()> {
    let mut node_config = config.node;
    if let Some(bind) = args.bind {
        node_config.bind_addr = bind;
    }
    if let Some(seed) = args.seed {
        node_config.seed_path = Some(seed);
    }
    let node = DevNode::new(node_config)?;
    let results = node.ledger().len()?;
    println!(
        "{} dev node on {} ({} results)",
        "✓".green().bold(),
        node.config().bind_addr.to_string().bold(),
        results,
    );
    node.serve().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use adv_codec::encode_payload;
    use clap::Parser;
    use adv_ledger::InMemoryResults;
    use adv_types::AdvanceResult;
    use serde_json::json;

    use crate::app::AppInput;

    fn state(index: u64, value: serde_json::Value) -> AdvanceResult {
        let serde_json::Value::Object(map) = value else { panic!("state must be an object") };
        AdvanceResult::accepted(index, encode_payload(&AppState(map)).unwrap())
    }

    fn input(index: u64) -> AdvanceResult {
        let payload = encode_payload(&AppInput { kind: "noop".into(), body: json!(42) }).unwrap();
        AdvanceResult::accepted(index, payload)
    }

    async fn output(results: Vec<AdvanceResult>) -> anyhow::Result<String> {
        let ledger = InMemoryResults::from_results(results).unwrap();
        let query = StateQuery::new(ledger).with_deadline(Duration::from_secs(5));
        let mut out = Vec::new();
        let res = write_state(&query, &mut out).await;
        let text = String::from_utf8(out).unwrap();
        res.map(|_| text)
    }

    #[tokio::test]
    async fn empty_ledger_prints_braces() {
        assert_eq!(output(vec![]).await.unwrap(), "{}\n");
    }

    #[tokio::test]
    async fn no_op_history_prints_braces() {
        let results = (0..3).map(AdvanceResult::empty).collect();
        assert_eq!(output(results).await.unwrap(), "{}\n");
    }

    #[tokio::test]
    async fn prints_indented_state() {
        let results = vec![
            AdvanceResult::empty(0),
            AdvanceResult::empty(1),
            state(2, json!({"count": 3})),
        ];
        assert_eq!(output(results).await.unwrap(), "{\n  \"count\": 3\n}\n");
    }

    #[tokio::test]
    async fn prints_latest_of_several_states() {
        let results = vec![
            state(0, json!({"count": 1})),
            AdvanceResult::empty(1),
            state(2, json!({"count": 5})),
        ];
        let out = output(results).await.unwrap();
        assert_eq!(out, "{\n  \"count\": 5\n}\n");
    }

    #[tokio::test]
    async fn schema_violation_fails_without_output() {
        let results = vec![state(0, json!({"count": 1})), input(1)];
        let ledger = InMemoryResults::from_results(results).unwrap();
        let query = StateQuery::new(ledger);
        let mut out = Vec::new();
        let err = write_state(&query, &mut out).await.unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:#}").contains("42"));
    }

    #[tokio::test]
    async fn unreachable_node_fails() {
        let query = StateQuery::new(HttpResultFetcher::new("http://127.0.0.1:1"))
            .with_deadline(Duration::from_secs(5));
        let mut out = Vec::new();
        assert!(write_state(&query, &mut out).await.is_err());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn state_command_returns_fetch_error() {
        let cli = Cli::try_parse_from([
            "adv", "state", "--node", "http://127.0.0.1:1", "--timeout", "5",
        ])
        .unwrap();
        let err = run_command(cli).await.unwrap_err();
        assert!(format!("{err:#}").contains("fetch failed"));
    }

    #[tokio::test]
    async fn missing_config_fails_before_any_command() {
        let cli = Cli::try_parse_from(["adv", "state", "--config", "/nonexistent/adv.toml"]).unwrap();
        assert!(run_command(cli).await.is_err());
    }

    #[tokio::test]
    async fn reads_from_dev_node() {
        let node = DevNode::new(adv_server::NodeConfig::default()).unwrap();
        let ledger = node.ledger();
        ledger.append(adv_types::AdvanceStatus::Accepted, vec![], vec![]).unwrap();
        let payload = encode_payload(&AppState(
            json!({"bugs": {"b1": {"open": true}}}).as_object().unwrap().clone(),
        ))
        .unwrap();
        ledger.append(adv_types::AdvanceStatus::Accepted, payload, vec![]).unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(node.serve_on(listener));

        let query = StateQuery::new(HttpResultFetcher::new(base)).with_deadline(Duration::from_secs(5));
        let state = latest_state(&query).await.unwrap().unwrap();
        assert_eq!(state.0["bugs"]["b1"]["open"], json!(true));
    }
}
