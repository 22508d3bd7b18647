//! Component readiness commands (schema registry, REST proxy, control
//! center, connect).

use anyhow::{Context, Result};
use secrecy::SecretString;
use ub_config::ProbeSettings;
use ub_probe::{ProbeTarget, Service};

use crate::args::ReadyArgs;

/// Build the probe target from command-line arguments.
pub fn target_from_args(args: ReadyArgs, settings: &ProbeSettings) -> Result<ProbeTarget> {
    let target = ProbeTarget::parse(&args.host, &args.port, &args.timeout)?
        .secure(args.secure)
        .ignore_cert(args.ignore_cert)
        .credentials(
            args.username,
            args.password.map(|p| SecretString::new(p.into())),
        )
        .poll_interval(settings.poll_interval);
    Ok(target)
}

pub async fn run(service: Service, args: ReadyArgs, settings: &ProbeSettings) -> Result<()> {
    let target = target_from_args(args, settings)?;
    let (host, port) = (target.host.clone(), target.port);

    service
        .check_ready(target)
        .await
        .with_context(|| format!("{service} at {host}:{port} is not ready"))
}
