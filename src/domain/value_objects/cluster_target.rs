//! Cluster target value object
//!
//! Naming conventions for the container registry and the cluster that the
//! deployable images are pushed to and started on.

/// Where images are published and run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTarget {
    /// Registry host (e.g. "us.gcr.io")
    pub registry: String,
    /// Domain the cloud project lives under (e.g. "google.com")
    pub project_domain: String,
    /// Cloud project name (e.g. "shuffler-test")
    pub project: String,
    /// Kubernetes cluster name
    pub cluster: String,
}

impl ClusterTarget {
    /// Project id as the cloud SDK expects it, e.g. `google.com:shuffler-test`
    pub fn qualified_project(&self) -> String {
        format!("{}:{}", self.project_domain, self.project)
    }

    /// Registry path under which all images are tagged
    pub fn registry_prefix(&self) -> String {
        format!("{}/{}/{}", self.registry, self.project_domain, self.project)
    }

    /// Fully-qualified registry tag for a locally built image
    pub fn image_tag(&self, image: &str) -> String {
        format!("{}/{}", self.registry_prefix(), image)
    }

    /// Full resource name of a Bigtable table in this project
    pub fn bigtable_table(&self, instance: &str, table: &str) -> String {
        format!(
            "projects/{}/instances/{}/tables/{}",
            self.qualified_project(),
            instance,
            table
        )
    }
}
