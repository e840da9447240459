use serde::Serialize;
use sso::identity::CallerIdentity;

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct JsonIdentity {
    pub profile: String,
    #[serde(flatten)]
    pub identity: CallerIdentity,
}

impl JsonIdentity {
    pub fn convert(profile: String, identity: CallerIdentity) -> Self {
        Self { profile, identity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_sts_field_names() {
        let json = JsonIdentity::convert(
            "dev".to_string(),
            CallerIdentity {
                account: "123456789012".to_string(),
                arn: "arn:aws:iam::123456789012:user/someone".to_string(),
                user_id: "AIDAEXAMPLE".to_string(),
            },
        );

        let value = serde_json::to_value(&json).unwrap();

        assert_eq!(value["Profile"], "dev");
        assert_eq!(value["Account"], "123456789012");
        assert_eq!(value["Arn"], "arn:aws:iam::123456789012:user/someone");
        assert_eq!(value["UserId"], "AIDAEXAMPLE");
    }
}
