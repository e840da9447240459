use anyhow::{Context, Result};
use tracing::debug;

pub struct Service {
    pub name: &'static str,
    pub url: &'static str,
}

pub const DEFAULT_SERVICE: &str = "Console (Main)";

pub const SERVICES: &[Service] = &[
    Service {
        name: DEFAULT_SERVICE,
        url: "https://console.aws.amazon.com/console/home",
    },
    Service {
        name: "SSO",
        url: "https://signin.aws.amazon.com/signin",
    },
    Service {
        name: "EC2",
        url: "https://console.aws.amazon.com/ec2/v2/home",
    },
    Service {
        name: "S3",
        url: "https://s3.console.aws.amazon.com/s3/home",
    },
    Service {
        name: "Lambda",
        url: "https://console.aws.amazon.com/lambda/home",
    },
    Service {
        name: "CloudFormation",
        url: "https://console.aws.amazon.com/cloudformation/home",
    },
    Service {
        name: "CloudWatch",
        url: "https://console.aws.amazon.com/cloudwatch/home",
    },
    Service {
        name: "IAM",
        url: "https://console.aws.amazon.com/iam/home",
    },
    Service {
        name: "RDS",
        url: "https://console.aws.amazon.com/rds/home",
    },
    Service {
        name: "DynamoDB",
        url: "https://console.aws.amazon.com/dynamodb/home",
    },
    Service {
        name: "ECS",
        url: "https://console.aws.amazon.com/ecs/home",
    },
    Service {
        name: "EKS",
        url: "https://console.aws.amazon.com/eks/home",
    },
    Service {
        name: "API Gateway",
        url: "https://console.aws.amazon.com/apigateway/home",
    },
    Service {
        name: "Route 53",
        url: "https://console.aws.amazon.com/route53/home",
    },
    Service {
        name: "SQS",
        url: "https://console.aws.amazon.com/sqs/home",
    },
    Service {
        name: "SNS",
        url: "https://console.aws.amazon.com/sns/home",
    },
    Service {
        name: "Secrets Manager",
        url: "https://console.aws.amazon.com/secretsmanager/home",
    },
    Service {
        name: "Systems Manager",
        url: "https://console.aws.amazon.com/systems-manager/home",
    },
    Service {
        name: "CodePipeline",
        url: "https://console.aws.amazon.com/codesuite/codepipeline/home",
    },
    Service {
        name: "CodeBuild",
        url: "https://console.aws.amazon.com/codesuite/codebuild/home",
    },
    Service {
        name: "Amplify",
        url: "https://console.aws.amazon.com/amplify/home",
    },
];

/// Looks a service up by name, ignoring case.
pub fn find_service(name: &str) -> Option<&'static Service> {
    let name = name.trim();
    SERVICES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub fn console_url(service: &Service, region: Option<&str>) -> String {
    match region.map(str::trim).filter(|r| !r.is_empty()) {
        Some(region) => format!("{}?region={}", service.url, region),
        None => service.url.to_string(),
    }
}

/// Hands `url` to the desktop's default browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    debug!("Opening {}", url);

    open::that(url).with_context(|| format!("Unable to open browser for {}", url))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_services_ignoring_case() {
        assert_eq!(find_service("ec2").map(|s| s.name), Some("EC2"));
        assert_eq!(
            find_service(" secrets manager ").map(|s| s.name),
            Some("Secrets Manager")
        );
        assert!(find_service("Nope").is_none());
    }

    #[test]
    fn default_service_is_first() {
        assert_eq!(SERVICES[0].name, DEFAULT_SERVICE);
    }

    #[test]
    fn appends_region_when_known() {
        let lambda = find_service("Lambda").unwrap();

        assert_eq!(
            console_url(lambda, Some("eu-west-1")),
            "https://console.aws.amazon.com/lambda/home?region=eu-west-1"
        );
        assert_eq!(
            console_url(lambda, Some("")),
            "https://console.aws.amazon.com/lambda/home"
        );
        assert_eq!(
            console_url(lambda, None),
            "https://console.aws.amazon.com/lambda/home"
        );
    }

    #[test]
    fn every_service_links_to_the_aws_console() {
        for service in SERVICES {
            let url = console_url(service, Some("us-east-1"));

            assert!(url.starts_with("https://"), "{}", url);
            assert!(url.contains(".aws.amazon.com/"), "{}", url);
            assert!(url.ends_with("?region=us-east-1"), "{}", url);
        }
    }
}
