//! Scene assembly and the generation engine
//!
//! The engine owns every piece of mutable state: current parameters, canvas
//! selection, derived extent, displayed scene and the pending generation
//! slot. A generation request snapshots the inputs into the slot; running it
//! builds a complete primitive list first and only then swaps it in, so an
//! observer never sees a partial scene.

use crate::color::ColorMode;
use crate::geometry::builders::build_pattern;
use crate::geometry::parameters::{PatternKind, PatternParameters};
use crate::geometry::primitive::Primitive;
use crate::io::error::{Result, export_precondition};
use crate::scene::extent::{AspectRatio, CanvasExtent, CanvasSelection};
use crate::scene::symmetry::apply_symmetry;
use crate::scene::variation;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One generated pattern at one canvas extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Builder that produced the primitives
    pub kind: PatternKind,
    /// Color mode the primitives were colored with
    pub color_mode: ColorMode,
    /// Canvas the primitives are laid out on
    pub extent: CanvasExtent,
    /// Primitives in drawing order
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Build the scene for a parameter set, symmetry included
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the parameters fail validation
    pub fn assemble(parameters: &PatternParameters, extent: CanvasExtent) -> Result<Self> {
        parameters.validate()?;
        let primitives = apply_symmetry(
            build_pattern(parameters, &extent),
            parameters.symmetry,
            extent.center(),
        );

        Ok(Self {
            kind: parameters.kind,
            color_mode: parameters.color_mode,
            extent,
            primitives,
        })
    }

    /// Number of primitives
    pub const fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has nothing to draw
    pub const fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Fail with `ExportPrecondition` if there is nothing to export
    ///
    /// # Errors
    ///
    /// Returns `ExportPrecondition` for a scene without primitives
    pub fn ensure_exportable(&self) -> Result<&Self> {
        if self.is_empty() {
            return Err(export_precondition(&"the scene has no primitives"));
        }
        Ok(self)
    }
}

/// Inputs captured when a generation was requested
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationJob {
    /// Parameter snapshot
    pub parameters: PatternParameters,
    /// Extent snapshot
    pub extent: CanvasExtent,
}

/// Outcome of a generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRequest {
    /// A job was queued and will run on the next `run_pending`
    Scheduled,
    /// A job was already pending; this request was discarded
    Dropped,
}

/// All mutable engine state
#[derive(Debug, Clone)]
pub struct EngineState {
    /// Current control parameters
    pub parameters: PatternParameters,
    /// Selector inputs of the current canvas
    pub canvas: CanvasSelection,
    /// Extent derived from `canvas`
    pub extent: CanvasExtent,
    /// Displayed scene, `None` until the first generation
    pub scene: Option<Scene>,
    /// Generation waiting to run
    pub pending: Option<GenerationJob>,
}

/// Owner of the engine state and the only writer of the displayed scene
#[derive(Debug, Clone)]
pub struct Engine {
    state: EngineState,
}

impl Engine {
    /// Engine with validated parameters and canvas and no scene yet
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation or the canvas
    /// selection yields invalid dimensions
    pub fn new(parameters: PatternParameters, canvas: CanvasSelection) -> Result<Self> {
        parameters.validate()?;
        let extent = canvas.extent()?;
        debug!(
            width = extent.width,
            height = extent.height,
            "Engine initialised"
        );

        Ok(Self {
            state: EngineState {
                parameters,
                canvas,
                extent,
                scene: None,
                pending: None,
            },
        })
    }

    /// Read-only view of the whole state
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Current parameters
    pub const fn parameters(&self) -> &PatternParameters {
        &self.state.parameters
    }

    /// Current canvas selection
    pub const fn canvas(&self) -> CanvasSelection {
        self.state.canvas
    }

    /// Current extent
    pub const fn extent(&self) -> &CanvasExtent {
        &self.state.extent
    }

    /// Displayed scene, if any generation has completed
    pub const fn scene(&self) -> Option<&Scene> {
        self.state.scene.as_ref()
    }

    /// Displayed scene, or `ExportPrecondition` when there is nothing to export
    ///
    /// # Errors
    ///
    /// Returns `ExportPrecondition` before the first generation or for an
    /// empty scene
    pub fn exportable_scene(&self) -> Result<&Scene> {
        self.scene()
            .ok_or_else(|| export_precondition(&"no pattern has been generated yet"))?
            .ensure_exportable()
    }

    /// Whether a generation is waiting to run
    pub const fn is_generating(&self) -> bool {
        self.state.pending.is_some()
    }

    /// Replace the parameters; the displayed scene is untouched
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if validation fails
    pub fn set_parameters(&mut self, parameters: PatternParameters) -> Result<()> {
        parameters.validate()?;
        self.state.parameters = parameters;
        Ok(())
    }

    /// Resize the canvas; the displayed scene is untouched
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the base size is not positive
    pub fn set_canvas(&mut self, ratio: AspectRatio, base_size: f64) -> Result<()> {
        let canvas = CanvasSelection { ratio, base_size };
        let extent = canvas.extent()?;
        debug!(%ratio, base_size, width = extent.width, height = extent.height, "Canvas resized");
        self.state.canvas = canvas;
        self.state.extent = extent;
        Ok(())
    }

    /// Snapshot the current inputs into the pending slot
    ///
    /// A request made while another is pending is dropped, not queued.
    pub fn request_generation(&mut self) -> GenerationRequest {
        if self.state.pending.is_some() {
            debug!("Generation already pending, request dropped");
            return GenerationRequest::Dropped;
        }

        self.state.pending = Some(GenerationJob {
            parameters: self.state.parameters,
            extent: self.state.extent,
        });
        GenerationRequest::Scheduled
    }

    /// Run the pending job, if any, and swap its scene in
    ///
    /// The pending slot is cleared whether the build succeeds or fails; a
    /// failed build leaves the previous scene displayed.
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the pending job
    pub fn run_pending(&mut self) -> Result<Option<&Scene>> {
        let Some(job) = self.state.pending.take() else {
            return Ok(None);
        };

        match Scene::assemble(&job.parameters, job.extent) {
            Ok(scene) => {
                info!(
                    kind = %scene.kind,
                    primitives = scene.len(),
                    seed = job.parameters.seed,
                    "Generated pattern"
                );
                self.state.scene = Some(scene);
                Ok(self.state.scene.as_ref())
            }
            Err(err) => {
                warn!(kind = %job.parameters.kind, error = %err, "Generation failed");
                Err(err)
            }
        }
    }

    /// Request and immediately run a generation
    ///
    /// If a job was already pending, that job is the one that runs.
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the job that ran
    pub fn generate(&mut self) -> Result<&Scene> {
        self.request_generation();
        self.run_pending()?;
        self.exportable_scene()
    }

    /// Reshuffle with a fresh random seed
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the generation
    pub fn regenerate(&mut self, rng: &mut impl Rng) -> Result<&Scene> {
        self.update_and_generate(|current| PatternParameters {
            seed: variation::fresh_seed(rng),
            ..*current
        })
    }

    /// Small perturbation: step the seed and regenerate
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the generation
    pub fn nudge_variation(&mut self) -> Result<&Scene> {
        self.update_and_generate(|current| PatternParameters {
            seed: variation::nudged_seed(current.seed),
            ..*current
        })
    }

    /// Reroll every parameter except the kind and regenerate
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the generation
    pub fn randomize_all(&mut self, rng: &mut impl Rng) -> Result<&Scene> {
        self.update_and_generate(|current| variation::randomized(current, rng))
    }

    /// Jitter the numeric parameters and regenerate
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the generation
    pub fn mutate(&mut self, rng: &mut impl Rng) -> Result<&Scene> {
        self.update_and_generate(|current| variation::mutated(current, rng))
    }

    /// Restore factory defaults with a fresh seed and regenerate
    ///
    /// # Errors
    ///
    /// Returns the assembly error of the generation
    pub fn reset_all(&mut self, rng: &mut impl Rng) -> Result<&Scene> {
        self.update_and_generate(|_| variation::reset(rng))
    }

    /// Apply a saved parameter set and canvas, then regenerate
    ///
    /// Dropped like the variation policies while a generation is pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or canvas are invalid, or the
    /// generation fails
    pub fn restore(
        &mut self,
        parameters: PatternParameters,
        canvas: CanvasSelection,
    ) -> Result<&Scene> {
        if self.is_generating() {
            debug!("Generation already pending, restore dropped");
            return self.generate();
        }
        parameters.validate()?;
        self.set_canvas(canvas.ratio, canvas.base_size)?;
        self.update_and_generate(|_| parameters)
    }

    /// Replace the parameters through `update` and regenerate
    ///
    /// While a job is pending the update is dropped along with the request
    /// and the pending job runs instead, so the current parameters always
    /// describe the scene that ends up displayed.
    fn update_and_generate(
        &mut self,
        update: impl FnOnce(&PatternParameters) -> PatternParameters,
    ) -> Result<&Scene> {
        if self.is_generating() {
            debug!("Generation already pending, parameter update dropped");
            return self.generate();
        }
        let parameters = update(&self.state.parameters);
        self.set_parameters(parameters)?;
        self.generate()
    }
}
