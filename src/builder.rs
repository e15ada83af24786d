//! The build pipeline: plan, render, package.
//!
//! Planning resolves a [`ProfileConfig`] and assigns every identifier in
//! declared order. Rendering fills each page with its icons and can run one
//! page per blocking task; pages are reassembled in declared order, so a
//! seeded [`IdGenerator`] yields the same profile either way.

use std::path::Path;
use std::sync::Arc;

use rand::{CryptoRng, RngCore};
use tracing::{debug, info, instrument};

use crate::action::ActionBuilder;
use crate::config::{ProfileConfig, Slot};
use crate::error::{ProfileError, Result};
use crate::icon::{Icon, IconRasterizer, Palette, Symbol};
use crate::ids::IdGenerator;
use crate::package::{BuildReport, write_profile};
use crate::page::{Page, Profile};

/// An icon waiting to be rasterized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub image_id: String,
    pub symbol: Symbol,
    pub palette: Palette,
    pub label: Option<String>,
}

/// A page with every action placed and its icons still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    pub page: Page,
    pub jobs: Vec<IconJob>,
}

impl PlannedPage {
    /// Rasterize the pending icons into the page.
    ///
    /// # Errors
    ///
    /// Returns the first rendering failure.
    pub fn render(self, rasterizer: &dyn IconRasterizer) -> Result<Page> {
        let Self { mut page, jobs } = self;
        for job in jobs {
            let data = rasterizer.rasterize(job.symbol, job.palette, job.label.as_deref())?;
            page.add_icon(Icon::new(job.image_id, data));
        }
        debug!(folder = %page.folder_id, icons = page.icons().len(), "Rendered page");
        Ok(page)
    }
}

/// A fully resolved profile awaiting rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePlan {
    pub name: String,
    pub pages: Vec<PlannedPage>,
}

impl ProfilePlan {
    pub fn icon_jobs(&self) -> usize {
        self.pages.iter().map(|p| p.jobs.len()).sum()
    }
}

/// Validate `config` and assign every identifier.
///
/// Per page: linkage id, folder token, then for each button and dial in
/// declared order an image token followed by an action id. When a later
/// entry takes an occupied slot, the replaced action's icon is dropped.
///
/// # Errors
///
/// Returns any validation error; no identifier is drawn in that case.
#[instrument(skip_all, fields(profile = %config.name))]
pub fn plan_profile<R: RngCore + CryptoRng>(
    config: &ProfileConfig,
    ids: &mut IdGenerator<R>,
) -> Result<ProfilePlan> {
    let resolved = config.resolve()?;

    let mut pages = Vec::with_capacity(resolved.len());
    for resolved_page in resolved {
        let mut page = Page::generate(ids);
        let mut jobs: Vec<IconJob> = Vec::with_capacity(resolved_page.controls.len());

        for control in resolved_page.controls {
            let image_id = ids.image();
            let action = ActionBuilder::new(ids).build(
                control.kind,
                control.title,
                Icon::reference_for(&image_id),
            );
            let replaced = match control.slot {
                Slot::Button { col, row } => page.set_button(col, row, action)?,
                Slot::Dial { index } => page.set_dial(index, action)?,
            };
            if let Some(old) = replaced {
                jobs.retain(|job| Icon::reference_for(&job.image_id) != old.image);
            }
            jobs.push(IconJob {
                image_id,
                symbol: control.symbol,
                palette: resolved_page.palette,
                label: control.label,
            });
        }

        debug!(
            folder = %page.folder_id,
            palette = %resolved_page.palette,
            actions = page.action_count(),
            "Planned page"
        );
        pages.push(PlannedPage { page, jobs });
    }

    let plan = ProfilePlan {
        name: config.name.clone(),
        pages,
    };
    info!(pages = plan.pages.len(), icons = plan.icon_jobs(), "Planned profile");
    Ok(plan)
}

/// Render every page in order on the current thread.
///
/// # Errors
///
/// Returns the first rendering failure.
#[instrument(skip_all, fields(profile = %plan.name))]
pub fn render_plan(plan: ProfilePlan, rasterizer: &dyn IconRasterizer) -> Result<Profile> {
    let pages = plan
        .pages
        .into_iter()
        .map(|planned| planned.render(rasterizer))
        .collect::<Result<Vec<_>>>()?;
    Profile::new(plan.name, pages)
}

/// Render each page on its own blocking task.
///
/// Results are awaited in declared order, so the assembled profile matches
/// [`render_plan`] exactly.
///
/// # Errors
///
/// Returns the first rendering failure in page order, or a render error if
/// a task panicked.
#[instrument(skip_all, fields(profile = %plan.name, pages = plan.pages.len()))]
pub async fn render_plan_parallel(
    plan: ProfilePlan,
    rasterizer: Arc<dyn IconRasterizer>,
) -> Result<Profile> {
    let handles: Vec<_> = plan
        .pages
        .into_iter()
        .map(|planned| {
            let rasterizer = Arc::clone(&rasterizer);
            tokio::task::spawn_blocking(move || planned.render(rasterizer.as_ref()))
        })
        .collect();

    let mut pages = Vec::with_capacity(handles.len());
    for handle in handles {
        let page = handle
            .await
            .map_err(|e| ProfileError::Render(format!("render task failed: {e}")))??;
        pages.push(page);
    }
    Profile::new(plan.name, pages)
}

/// Plan, render and write a profile archive to `path`.
///
/// # Errors
///
/// Returns the first failure of any stage; nothing is written unless every
/// page rendered.
#[instrument(skip_all, fields(profile = %config.name, path = %path.display()))]
pub fn build_to_file<R: RngCore + CryptoRng>(
    config: &ProfileConfig,
    path: &Path,
    ids: &mut IdGenerator<R>,
    rasterizer: &dyn IconRasterizer,
) -> Result<BuildReport> {
    let plan = plan_profile(config, ids)?;
    let profile = render_plan(plan, rasterizer)?;
    let report = write_profile(path, &profile, ids)?;
    info!(size = report.size, root = %report.root_id, "Profile built");
    Ok(report)
}

/// [`build_to_file`] with pages rendered in parallel.
///
/// # Errors
///
/// Returns the first failure of any stage.
#[instrument(skip_all, fields(profile = %config.name, path = %path.display()))]
pub async fn build_to_file_async<R: RngCore + CryptoRng>(
    config: &ProfileConfig,
    path: &Path,
    ids: &mut IdGenerator<R>,
    rasterizer: Arc<dyn IconRasterizer>,
) -> Result<BuildReport> {
    let plan = plan_profile(config, ids)?;
    let profile = render_plan_parallel(plan, rasterizer).await?;
    let report = write_profile(path, &profile, ids)?;
    info!(size = report.size, root = %report.root_id, "Profile built");
    Ok(report)
}
