use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    pub account: String,
    pub arn: String,
    pub user_id: String,
}

/// Asks STS who the credentials of `profile_name` belong to.
pub async fn caller_identity(profile_name: &str) -> Result<CallerIdentity> {
    let config = aws_config::from_env()
        .profile_name(profile_name)
        .load()
        .await;

    debug!(
        "Loaded AWS config for profile '{}', region {:?}",
        profile_name,
        config.region()
    );

    let sts_client = aws_sdk_sts::Client::new(&config);

    let response = sts_client
        .get_caller_identity()
        .send()
        .await
        .with_context(|| format!("Failed to get the identity of profile '{}'", profile_name))?;

    let account = response
        .account
        .ok_or(anyhow!("No account found in caller identity response"))?;

    let arn = response
        .arn
        .ok_or(anyhow!("No ARN found in caller identity response"))?;

    let user_id = response
        .user_id
        .ok_or(anyhow!("No user ID found in caller identity response"))?;

    Ok(CallerIdentity {
        account,
        arn,
        user_id,
    })
}
