//! UniProt ID mapping client.
//!
//! Labels are submitted in batches of at most `batch_size` ids. Each batch is one ID mapping
//! job: submitted, polled until it finishes, and its results streamed as TSV. Batches run one
//! after another; nothing is retried.

use std::thread::sleep;
use std::time::Duration;

use log::{debug, info};
use serde_json::Value;
use ureq::Agent;

use crate::consts::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_POLLS, DEFAULT_POLL_INTERVAL, DEFAULT_UNIPROT_API};
use crate::errors::MappingError;
use crate::mapping::{IdMapping, IdResolver, MappingSource, parse_mapping_tsv};

/// Target database of every mapping job.
const TARGET_DB: &str = "UniProtKB";

/// Builder for constructing a [`UniProtClient`] with custom configuration.
///
/// ```rust,no_run
/// use pairmsa_uniprot::UniProtClient;
///
/// let client = UniProtClient::builder()
///     .with_api("https://rest.uniprot.org".to_string())
///     .with_batch_size(5_000)
///     .finish();
/// ```
#[derive(Default)]
pub struct UniProtClientBuilder {
    api: Option<String>,
    batch_size: Option<usize>,
    poll_interval: Option<Duration>,
    max_polls: Option<usize>,
}

impl UniProtClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the UniProt REST API.
    pub fn with_api(mut self, api: String) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the most labels submitted per job. Zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }

    /// Sets how many times a job's status is checked before giving up.
    pub fn with_max_polls(mut self, max_polls: usize) -> Self {
        self.max_polls = Some(max_polls);
        self
    }

    pub fn finish(self) -> UniProtClient {
        let api = self
            .api
            .unwrap_or_else(|| DEFAULT_UNIPROT_API.to_string())
            .trim_end_matches('/')
            .to_string();

        UniProtClient {
            api,
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE).max(1),
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
            max_polls: self.max_polls.unwrap_or(DEFAULT_MAX_POLLS),
            agent: Agent::new_with_defaults(),
        }
    }
}

/// Client for the UniProt ID mapping service.
pub struct UniProtClient {
    /// Base URL of the UniProt REST API
    pub api: String,
    pub batch_size: usize,
    pub poll_interval: Duration,
    pub max_polls: usize,
    agent: Agent,
}

/// State of a submitted job, as reported by the status endpoint.
#[derive(Debug, PartialEq, Eq)]
enum JobState {
    Running,
    Finished,
    Failed(String),
}

fn malformed(url: &str, message: impl Into<String>) -> MappingError {
    MappingError::MalformedResponse {
        url: url.to_string(),
        message: message.into(),
    }
}

fn job_id_from(body: &str, url: &str) -> Result<String, MappingError> {
    let value: Value = serde_json::from_str(body).map_err(|e| malformed(url, e.to_string()))?;
    value
        .get("jobId")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed(url, "missing jobId"))
}

///
/// Interpret a status response. A finished job may instead answer with its results
/// (the status endpoint redirects there), which also counts as finished.
///
fn job_state_from(body: &str, url: &str) -> Result<JobState, MappingError> {
    let value: Value = serde_json::from_str(body).map_err(|e| malformed(url, e.to_string()))?;

    match value.get("jobStatus").and_then(Value::as_str) {
        Some("NEW") | Some("RUNNING") => Ok(JobState::Running),
        Some("FINISHED") => Ok(JobState::Finished),
        Some(other) => Ok(JobState::Failed(other.to_string())),
        None if value.get("results").is_some() || value.get("failedIds").is_some() => {
            Ok(JobState::Finished)
        }
        None => Err(malformed(url, "missing jobStatus")),
    }
}

impl UniProtClient {
    pub fn builder() -> UniProtClientBuilder {
        UniProtClientBuilder::new()
    }

    fn read_body(response: ureq::http::Response<ureq::Body>, url: &str) -> Result<String, MappingError> {
        let mut response = response;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| MappingError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    fn request_error(url: &str, error: ureq::Error) -> MappingError {
        match error {
            ureq::Error::StatusCode(status) => MappingError::Status {
                status,
                url: url.to_string(),
            },
            e => MappingError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            },
        }
    }

    fn get(&self, url: &str) -> Result<String, MappingError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| Self::request_error(url, e))?;
        Self::read_body(response, url)
    }

    fn submit(&self, ids: &[String], source: MappingSource) -> Result<String, MappingError> {
        let url = format!("{}/idmapping/run", self.api);
        let joined = ids.join(",");
        let response = self
            .agent
            .post(&url)
            .send_form([
                ("from", source.as_str()),
                ("to", TARGET_DB),
                ("ids", joined.as_str()),
            ])
            .map_err(|e| Self::request_error(&url, e))?;

        job_id_from(&Self::read_body(response, &url)?, &url)
    }

    fn wait_for(&self, job_id: &str) -> Result<(), MappingError> {
        let url = format!("{}/idmapping/status/{}", self.api, job_id);
        for poll in 0..self.max_polls {
            match job_state_from(&self.get(&url)?, &url)? {
                JobState::Finished => return Ok(()),
                JobState::Failed(status) => {
                    return Err(MappingError::JobFailed {
                        job_id: job_id.to_string(),
                        status,
                    });
                }
                JobState::Running => {
                    debug!("ID mapping job {} still running (check {})", job_id, poll + 1);
                    sleep(self.poll_interval);
                }
            }
        }

        Err(MappingError::JobTimeout {
            job_id: job_id.to_string(),
            polls: self.max_polls,
        })
    }

    fn fetch_results(&self, job_id: &str) -> Result<IdMapping, MappingError> {
        let url = format!(
            "{}/idmapping/uniprotkb/results/stream/{}?format=tsv&fields=accession",
            self.api, job_id
        );
        let body = self.get(&url)?;
        Ok(parse_mapping_tsv(body.as_bytes())?)
    }
}

impl IdResolver for UniProtClient {
    fn resolve(&self, labels: &[String], source: MappingSource) -> Result<IdMapping, MappingError> {
        let mut mapping = IdMapping::default();
        let n_batches = labels.len().div_ceil(self.batch_size);

        for (i, batch) in labels.chunks(self.batch_size).enumerate() {
            info!(
                "Mapping {} {} ids to {} (batch {}/{})",
                batch.len(),
                source,
                TARGET_DB,
                i + 1,
                n_batches
            );
            let job_id = self.submit(batch, source)?;
            self.wait_for(&job_id)?;

            for (label, accessions) in self.fetch_results(&job_id)? {
                mapping.extend_label(label, accessions);
            }
        }

        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_builder_defaults() {
        let client = UniProtClient::builder().finish();
        assert_eq!(client.api, DEFAULT_UNIPROT_API);
        assert_eq!(client.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(client.max_polls, DEFAULT_MAX_POLLS);
    }

    #[rstest]
    fn test_builder_overrides() {
        let client = UniProtClient::builder()
            .with_api("http://localhost:8080/".to_string())
            .with_batch_size(0)
            .with_poll_interval(Duration::from_millis(10))
            .with_max_polls(3)
            .finish();

        assert_eq!(client.api, "http://localhost:8080");
        assert_eq!(client.batch_size, 1);
        assert_eq!(client.poll_interval, Duration::from_millis(10));
        assert_eq!(client.max_polls, 3);
    }

    #[rstest]
    fn test_job_id_from() {
        assert_eq!(job_id_from(r#"{"jobId":"abc123"}"#, "u").unwrap(), "abc123");
        assert!(matches!(
            job_id_from(r#"{"messages":["bad"]}"#, "u"),
            Err(MappingError::MalformedResponse { .. })
        ));
        assert!(job_id_from("not json", "u").is_err());
    }

    #[rstest]
    #[case(r#"{"jobStatus":"RUNNING"}"#, JobState::Running)]
    #[case(r#"{"jobStatus":"NEW"}"#, JobState::Running)]
    #[case(r#"{"jobStatus":"FINISHED"}"#, JobState::Finished)]
    #[case(r#"{"results":[{"from":"UniRef100_P12345","to":"P12345"}]}"#, JobState::Finished)]
    #[case(r#"{"jobStatus":"ERROR"}"#, JobState::Failed("ERROR".to_string()))]
    fn test_job_state_from(#[case] body: &str, #[case] expected: JobState) {
        assert_eq!(job_state_from(body, "u").unwrap(), expected);
    }

    #[rstest]
    #[ignore = "Avoid UniProt dependency in CI"]
    fn test_resolve_against_uniprot() {
        let client = UniProtClient::builder().finish();
        let labels = vec!["UniRef100_P12345".to_string()];
        let mapping = client.resolve(&labels, MappingSource::UniRef100).unwrap();
        assert!(mapping["UniRef100_P12345"].contains(&"P12345".to_string()));
    }
}
