use crate::domain::model::{GuideDataset, GuideEntry, Topic};

/// Hero section: the three getting-started steps, numbered in this order.
pub const WELCOME_STEPS: &[GuideEntry] = &[
    GuideEntry::new(
        "Create a free account",
        "No credit card required.",
        "https://newrelic.com/signup",
    ),
    GuideEntry::new(
        "Start collecting data",
        "Our UI guides you through setup and install.",
        "https://one.newrelic.com/launcher/nr1-core.settings?pane=eyJuZXJkbGV0SWQiOiJ0dWNzb24ucGxnLWluc3RydW1lbnQtZXZlcnl0aGluZyJ9",
    ),
    GuideEntry::new(
        "Set up alerts",
        "Get notified quickly about changes in your system.",
        "/docs/alerts/new-relic-alerts/getting-started/introduction-new-relic-alerts",
    ),
];

pub const TDP_GUIDES: &[GuideEntry] = &[
    GuideEntry::new(
        "Introduction to Telemetry Data Platform",
        "How to manage all your monitoring in one place.",
        "/docs/data-ingest-apis/get-data-new-relic/getting-started/get-started-telemetry-data-platform",
    ),
    GuideEntry::new(
        "Data explorer",
        "Query and build charts with NRQL, our PromQL-style syntax, or our visual chart builder.",
        "/docs/query-your-data/explore-query-data/data-explorer/introduction-data-explorer",
    ),
    GuideEntry::new(
        "Dashboards",
        "Combine data from anywhere in our platform into customized dashboards.",
        "/docs/dashboards/new-relic-one-dashboards/get-started/introduction-new-relic-one-dashboards",
    ),
    GuideEntry::new(
        "Log management",
        "Get logs alongside your telemetry data with our fast, scalable log management.",
        "/docs/logs/new-relic-logs/get-started/introduction-new-relic-logs",
    ),
    GuideEntry::new(
        "APIs",
        "Find APIs to send data in, get data out, or manage the New Relic platform.",
        "/docs/apis/get-started/intro-apis/introduction-new-relic-apis",
    ),
    GuideEntry::new(
        "Manage data",
        "Monitor and control your data usage.",
        "/docs/manage-your-data",
    ),
    GuideEntry::new(
        "Build on New Relic One",
        "Learn how to build custom apps on our platform at developer.newrelic.com",
        "https://developer.newrelic.com",
    ),
];

pub const FSO_GUIDES: &[GuideEntry] = &[
    GuideEntry::new(
        "Introduction to Full-Stack Observability",
        "Get deep insight into everything from infrastructure to server code to end-user apps.",
        "/docs/introduction-full-stack-observability",
    ),
    GuideEntry::new(
        "APM",
        "Get real-time and trending data about your app's performance and stability.",
        "/docs/apm",
    ),
    GuideEntry::new(
        "Browser",
        "Measure website performance, track errors, and see how users interact with your site.",
        "/docs/browser",
    ),
    GuideEntry::new(
        "Distributed Tracing",
        "Track requests through your distributed system to find trends and anomalies.",
        "/docs/understand-dependencies/distributed-tracing/get-started/introduction-distributed-tracing",
    ),
    GuideEntry::new(
        "Infrastructure",
        "Monitor your infrastructure\u{2014}hosts, cloud providers, container services, backend services, orchestrators, and more.",
        "/docs/infrastructure",
    ),
    GuideEntry::new(
        "Logs in context",
        "Link your log data to APM agent data so you can pinpoint where things are going wrong.",
        "/docs/logs/enable-logs/configure-logs-context/configure-logs-context-apm-agents",
    ),
    GuideEntry::new(
        "Mobile",
        "Understand user journeys in your Android and iOS apps and troubleshoot crashes.",
        "/docs/mobile-monitoring",
    ),
    GuideEntry::new(
        "Serverless",
        "Monitor AWS Lambda, Azure Functions, and Google Cloud Functions.",
        "/docs/serverless-function-monitoring",
    ),
    GuideEntry::new(
        "Synthetics",
        "Simulate user activity to detect outages and fix poor website performance.",
        "/docs/synthetics",
    ),
];

pub const AI_GUIDES: &[GuideEntry] = &[
    GuideEntry::new(
        "Introduction to Alerts",
        "Get notified about important changes in your system based on any data you connect to New Relic.",
        "/docs/alerts/new-relic-alerts/getting-started/introduction-new-relic-alerts",
    ),
    GuideEntry::new(
        "Introduction to Applied Intelligence",
        "Recognize issues sooner, resolve problems faster, and reduce noise for better incident management.",
        "/docs/new-relic-one/use-new-relic-one/new-relic-ai/introduction-new-relic-ai",
    ),
    GuideEntry::new(
        "Incident Intelligence",
        "Get an overview of all your incidents. See sources and related events, and find out how they all correlate.",
        "/docs/new-relic-one/use-new-relic-one/new-relic-ai/get-started-incident-intelligence",
    ),
    GuideEntry::new(
        "Incident Workflows",
        "Enrich your incidents with New Relic data before sending them to your notification platform.",
        "/docs/new-relic-one/use-new-relic-one/new-relic-ai/enhance-notifications-using-incident-workflows",
    ),
    GuideEntry::new(
        "Proactive Detection",
        "Get notified by Slack or webhook of unusual app behavior.",
        "/docs/new-relic-one/use-new-relic-one/new-relic-ai/proactive-detection-new-relic-ai",
    ),
];

pub const TDP: GuideDataset = GuideDataset {
    topic: Topic::TelemetryDataPlatform,
    entries: TDP_GUIDES,
};

pub const FSO: GuideDataset = GuideDataset {
    topic: Topic::FullStackObservability,
    entries: FSO_GUIDES,
};

pub const AI: GuideDataset = GuideDataset {
    topic: Topic::AppliedIntelligence,
    entries: AI_GUIDES,
};

/// The three topic datasets in page order.
pub fn guide_datasets() -> [GuideDataset; 3] {
    [TDP, FSO, AI]
}
