//! Deployment Controller
//!
//! Builds, publishes, starts and stops images on the remote cluster.
//! Every external call is checked; the first failure aborts the operation
//! and is returned with the failing tool's exit code.

use std::path::Path;

use crate::config::ProjectLayout;
use crate::domain::entities::BASE_IMAGE;
use crate::domain::ports::{CommandRunner, ConsoleEvent, EventSink, ExternalCommand, FileSystem};
use crate::domain::value_objects::ImageSet;
use crate::error::{ConsoleError, ConsoleResult};

use super::options::{DeployOptions, ANALYZER_CONFIG_FILES, BASE_RUNTIME_FILES};
use super::result::{LifecycleResult, LifecycleStep};
use super::tokens::{ClusterCredentials, StagedBaseImage};

/// Image whose build context also receives the registration files
const ANALYZER_CONTEXT: &str = "analyzer";

/// Deployment lifecycle controller
pub struct DeploymentController<C, F, E>
where
    C: CommandRunner,
    F: FileSystem,
    E: EventSink,
{
    layout: ProjectLayout,
    options: DeployOptions,
    runner: C,
    fs: F,
    events: E,
}

impl<C, F, E> DeploymentController<C, F, E>
where
    C: CommandRunner,
    F: FileSystem,
    E: EventSink,
{
    pub fn new(layout: ProjectLayout, options: DeployOptions, runner: C, fs: F, events: E) -> Self {
        Self {
            layout,
            options,
            runner,
            fs,
            events,
        }
    }

    /// Stage the files the base image and the analyzer image are built from
    pub fn stage_base_image(&self) -> ConsoleResult<StagedBaseImage> {
        let base_dir = self.layout.out(BASE_IMAGE);
        self.fs.create_dir_all(&base_dir)?;
        for file in BASE_RUNTIME_FILES {
            self.copy_into(&self.layout.sysroot(file), &base_dir)?;
        }

        let analyzer_dir = self.layout.out(ANALYZER_CONTEXT);
        self.fs.create_dir_all(&analyzer_dir)?;
        for file in ANALYZER_CONFIG_FILES {
            self.copy_into(&self.layout.source(file), &analyzer_dir)?;
        }

        log::debug!("Staged base image context in {}", base_dir.display());
        Ok(StagedBaseImage::new())
    }

    /// Build the base image, then every image in `images`
    pub fn build(
        &self,
        _staged: &StagedBaseImage,
        images: &ImageSet,
    ) -> ConsoleResult<LifecycleResult> {
        let mut result = LifecycleResult::new(LifecycleStep::Build);
        for name in std::iter::once(BASE_IMAGE).chain(images.names()) {
            self.events.on_event(ConsoleEvent::ImageBuilding {
                image: name.to_string(),
            });
            let context = self.layout.out(name);
            self.fs.create_dir_all(&context)?;
            self.copy_into(
                &self.layout.source(Path::new("docker").join(name).join("Dockerfile")),
                &context,
            )?;
            self.runner.check(
                &ExternalCommand::new("docker")
                    .args(["build", "-t", name])
                    .arg(context.to_string_lossy()),
            )?;
            result.images.push(name);
        }
        Ok(result)
    }

    /// Fetch cluster credentials for kubectl
    pub fn establish_credentials(&self) -> ConsoleResult<ClusterCredentials> {
        let target = &self.options.target;
        self.runner.check(
            &ExternalCommand::new("gcloud")
                .args(["container", "clusters", "get-credentials"])
                .arg(target.cluster.as_str())
                .arg("--project")
                .arg(target.qualified_project()),
        )?;
        Ok(ClusterCredentials::new())
    }

    /// Tag each image for the registry and push it
    pub fn publish(
        &self,
        _credentials: &ClusterCredentials,
        images: &ImageSet,
    ) -> ConsoleResult<LifecycleResult> {
        let mut result = LifecycleResult::new(LifecycleStep::Publish);
        for image in images.iter() {
            let name = image.name();
            let tag = self.options.target.image_tag(name);
            self.events.on_event(ConsoleEvent::ImagePublishing {
                image: name.to_string(),
                tag: tag.clone(),
            });
            self.runner
                .check(&ExternalCommand::new("docker").args(["tag", name, tag.as_str()]))?;
            self.runner
                .check(&ExternalCommand::new("gcloud").args(["docker", "--", "push", tag.as_str()]))?;
            result.images.push(name);
        }
        Ok(result)
    }

    /// Run each image on the cluster and expose it through a load balancer
    pub fn start(
        &self,
        _credentials: &ClusterCredentials,
        images: &ImageSet,
    ) -> ConsoleResult<LifecycleResult> {
        let mut result = LifecycleResult::new(LifecycleStep::Start);
        for image in images.iter() {
            let name = image.name();
            self.events.on_event(ConsoleEvent::ImageStarting {
                image: name.to_string(),
            });

            let mut run = ExternalCommand::new("kubectl")
                .args(["run", name])
                .arg(format!("--image={}", self.options.target.image_tag(name)))
                .arg(format!("--port={}", image.container_port));
            let args = image.start_args(&self.options.observation_table);
            if !args.is_empty() {
                run = run.arg("--").args(args);
            }
            self.runner.check(&run)?;

            self.runner.check(&ExternalCommand::new("kubectl").args([
                "expose",
                "deployment",
                name,
                "--type=LoadBalancer",
            ]))?;
            result.images.push(name);
        }
        Ok(result)
    }

    /// Delete each image's service and deployment
    pub fn stop(
        &self,
        _credentials: &ClusterCredentials,
        images: &ImageSet,
    ) -> ConsoleResult<LifecycleResult> {
        let mut result = LifecycleResult::new(LifecycleStep::Stop);
        for image in images.iter() {
            let name = image.name();
            self.events.on_event(ConsoleEvent::ImageStopping {
                image: name.to_string(),
            });
            self.runner.check(
                &ExternalCommand::new("kubectl").args(["delete", "service,deployment", name]),
            )?;
            result.images.push(name);
        }
        Ok(result)
    }

    fn copy_into(&self, from: &Path, dir: &Path) -> ConsoleResult<()> {
        if !self.fs.exists(from) {
            return Err(ConsoleError::MissingArtifact {
                path: from.to_path_buf(),
            });
        }
        let dest = self.fs.copy(from, dir)?;
        log::debug!("Copied {} to {}", from.display(), dest.display());
        Ok(())
    }
}
