use anyhow::Context;
use colored::Colorize;
use funflow_cloud::{ActionType, PollConfig, ensure_network_context, plan_network_context};
use funflow_cloud_aliyun::{AliyunNetworkProvider, Credentials};
use funflow_config::Profile;
use std::time::Duration;

pub async fn handle(dry_run: bool, json: bool) -> anyhow::Result<()> {
    let profile = Profile::load().context("failed to load the account profile")?;
    tracing::debug!(?profile, "Loaded profile");

    let provider = AliyunNetworkProvider::builder(
        &profile.region,
        Credentials::new(&profile.access_key_id, &profile.access_key_secret),
    )
    .timeout(Duration::from_secs(profile.timeout_secs))
    .build()?;

    if dry_run {
        let plan = plan_network_context(&provider).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        println!("{} {}", "Region:".bold(), profile.region);
        for action in &plan.actions {
            let line = match action.action_type {
                ActionType::Create => format!("  + {}", action.description).green(),
                ActionType::NoOp => format!("  = {}", action.description).dimmed(),
            };
            println!("{}", line);
        }
        println!();
        println!("{}", plan.summary());
        return Ok(());
    }

    let context = ensure_network_context(&provider, &PollConfig::default()).await?;

    for pending in &context.pending {
        eprintln!(
            "{}",
            format!(
                "warning: {} {} is not available yet (last status: {})",
                pending.kind,
                pending.id,
                pending.last_status.as_deref().unwrap_or("unknown")
            )
            .yellow()
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&context)?);
    } else {
        println!("{} {}", "vpc:".cyan(), context.vpc_id);
        println!("{} {}", "vswitches:".cyan(), context.vswitch_ids.join(", "));
        println!("{} {}", "security group:".cyan(), context.security_group_id);
    }
    Ok(())
}
