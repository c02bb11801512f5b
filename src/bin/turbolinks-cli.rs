use std::path::PathBuf;
use std::str::FromStr;

use axum::http::{Method, StatusCode};
use clap::Parser;
use url::Url;

use turbolinks_redirect::config::load_config;
use turbolinks_redirect::redirect::{
    RedirectDecision, RedirectOptions, RedirectRequest, RedirectTarget, Redirector, RouteDescriptor,
};
use turbolinks_redirect::routing::RouteTable;

#[derive(Parser)]
#[command(name = "turbolinks-cli")]
#[command(about = "Show how a redirect would be answered", long_about = None)]
struct Cli {
    /// URL or path to redirect to
    #[arg(required_unless_present = "route", conflicts_with = "route")]
    target: Option<String>,

    /// Named route to redirect to instead of a URL
    #[arg(long)]
    route: Option<String>,

    /// Route parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// HTTP method of the incoming request
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Mark the incoming request as XMLHttpRequest
    #[arg(long)]
    xhr: bool,

    /// Origin relative targets resolve against
    #[arg(long, default_value = "http://localhost/")]
    origin: String,

    /// Status for a plain redirect
    #[arg(long)]
    status: Option<u16>,

    /// Keys to refresh after navigating (repeatable)
    #[arg(long)]
    change: Vec<String>,

    /// Keys to preserve while navigating (repeatable)
    #[arg(long)]
    keep: Vec<String>,

    /// Force (true) or forbid (false) the Turbolinks instruction
    #[arg(long)]
    turbolinks: Option<bool>,

    /// Use the dedicated call that always answers with an instruction
    #[arg(long)]
    via_turbolinks: bool,

    /// Config file providing routes and the default status
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut redirector = Redirector::new(RouteTable::new());
    if let Some(path) = &cli.config {
        let config = load_config(path)?;
        redirector = Redirector::new(RouteTable::from_config(&config.routes))
            .with_default_status(StatusCode::from_u16(config.redirect.default_status)?);
    }

    let method = Method::from_str(&cli.method.to_ascii_uppercase())?;
    let request = RedirectRequest::new(method, Url::parse(&cli.origin)?).xhr(cli.xhr);

    let target = match (cli.route, cli.target) {
        (Some(name), _) => RedirectTarget::Route(
            cli.params
                .into_iter()
                .fold(RouteDescriptor::named(name), |route, (k, v)| route.param(k, v)),
        ),
        (None, Some(url)) => RedirectTarget::Url(url),
        (None, None) => return Err("a target or --route is required".into()),
    };

    let mut options = RedirectOptions::new();
    options.turbolinks = cli.turbolinks;
    if let Some(status) = cli.status {
        options = options.status(StatusCode::from_u16(status)?);
    }
    if !cli.change.is_empty() {
        options = options.change(cli.change);
    }
    if !cli.keep.is_empty() {
        options = options.keep(cli.keep);
    }

    let decision = if cli.via_turbolinks {
        redirector.decide_via_turbolinks(&request, &target, &options)?
    } else {
        redirector.decide(&request, &target, &options)?
    };

    match decision {
        RedirectDecision::Instruction(visit) => println!("{}", visit.render()),
        RedirectDecision::HttpRedirect { location, status } => {
            println!("{} Location: {}", status, location)
        }
    }

    Ok(())
}
