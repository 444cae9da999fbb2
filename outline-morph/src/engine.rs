use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::align;
use crate::easing::Easing;
use crate::error::Result;
use crate::interpolate;
use crate::library::{Direction, ShapeLibrary};
use crate::outline::Outline;
use crate::point_set::PointSet;
use crate::sampler::MIN_SAMPLES;
use crate::winding::Winding;

/// Where a transition that interrupts another one starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartFrom {
    /// The library entry the cursor was on before the new advance, i.e. the
    /// interrupted transition's target. Output never mixes three shapes.
    #[default]
    Library,
    /// The last frame actually emitted, so the motion stays continuous.
    Snapshot,
}

#[derive(Debug, Clone)]
pub struct MorphConfig {
    pub sample_count: usize,
    pub duration: Duration,
    pub easing: Easing,
    pub winding: Winding,
    pub restart: RestartFrom,
    /// Skip the animation: every transition lands on its target in one frame.
    pub reduced_motion: bool,
    /// Sample at half resolution.
    pub compact_layout: bool,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            sample_count: 72,
            duration: Duration::from_millis(500),
            easing: Easing::EaseOutCubic,
            winding: Winding::Clockwise,
            restart: RestartFrom::Library,
            reduced_motion: false,
            compact_layout: false,
        }
    }
}

impl MorphConfig {
    pub fn effective_sample_count(&self) -> usize {
        if self.compact_layout {
            (self.sample_count / 2).max(MIN_SAMPLES)
        } else {
            self.sample_count
        }
    }

    pub fn effective_duration(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.duration
        }
    }
}

/// One step of a transition, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub path: String,
    /// Eased progress in `[0.0, 1.0]`.
    pub progress: f64,
    /// Last frame of the transition; `path` is the target outline.
    pub done: bool,
}

/// Receives serialized outlines. The engine never touches drawing state.
pub trait Renderer {
    type Error;

    fn render(&mut self, path: &str) -> std::result::Result<(), Self::Error>;
}

/// Progress of the one active transition. Created by `advance`, dropped on
/// completion or replacement.
#[derive(Debug, Clone)]
struct MorphState {
    from: PointSet,
    /// Already rotated to line up with `from`.
    to: PointSet,
    /// Set by the first tick, so `t` starts at 0 whenever the host
    /// begins drawing.
    started: Option<Instant>,
    t: f64,
    last_emitted: Option<PointSet>,
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Transitioning(MorphState),
}

/// Drives morph transitions between the entries of a [`ShapeLibrary`].
///
/// Call [`MorphEngine::advance`] on user input and [`MorphEngine::tick`] once
/// per display frame.
pub struct MorphEngine {
    library: ShapeLibrary,
    config: MorphConfig,
    /// Committed shape shown while idle.
    current: PointSet,
    state: State,
}

impl MorphEngine {
    pub fn new<I>(outlines: I, config: MorphConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Outline>,
    {
        let library =
            ShapeLibrary::build(outlines, config.effective_sample_count(), config.winding)?;
        Ok(Self::with_library(library, config))
    }

    pub fn with_library(library: ShapeLibrary, config: MorphConfig) -> Self {
        let current = library.current().cloned().unwrap_or_default();

        Self {
            library,
            config,
            current,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    pub fn cursor(&self) -> usize {
        self.library.cursor()
    }

    /// Committed shape. Changes only when a transition completes.
    pub fn current(&self) -> &PointSet {
        &self.current
    }

    pub fn current_path_data(&self) -> String {
        self.current.to_path_data()
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, State::Transitioning(_))
    }

    /// Eased progress of the active transition.
    pub fn progress(&self) -> Option<f64> {
        match &self.state {
            State::Idle => None,
            State::Transitioning(morph) => Some(morph.t),
        }
    }

    /// Step the library cursor and start morphing toward the new entry.
    ///
    /// An in-flight transition is dropped on the spot. Returns `false` only
    /// for an empty library.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let Some((previous, next)) = self.library.advance(direction) else {
            return false;
        };

        let from = match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => self.current.clone(),
            State::Transitioning(morph) => {
                trace!("transition cancelled at t={:.3}", morph.t);

                match self.config.restart {
                    RestartFrom::Library => morph.to,
                    RestartFrom::Snapshot => morph.last_emitted.unwrap_or(morph.from),
                }
            }
        };

        let Some(target) = self.library.get(next) else {
            return false;
        };

        let rotation = align::search(&from, target);
        debug!(
            "morph {previous} -> {next} ({direction:?}), rotation offset {}",
            rotation.offset
        );

        self.state = State::Transitioning(MorphState {
            from,
            to: target.rotated(rotation.offset),
            started: None,
            t: 0.0,
            last_emitted: None,
        });

        true
    }

    /// Produce the frame for `now`, or `None` while idle.
    ///
    /// The frame that reaches `t = 1` carries the target exactly, commits it
    /// as the current shape and returns the engine to idle.
    pub fn tick(&mut self, now: Instant) -> Option<Frame> {
        let duration = self.config.effective_duration();
        let easing = self.config.easing;

        let State::Transitioning(morph) = &mut self.state else {
            return None;
        };

        let started = *morph.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);

        let raw_t = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
        };

        if raw_t >= 1.0 {
            let State::Transitioning(morph) = std::mem::replace(&mut self.state, State::Idle)
            else {
                return None;
            };

            debug!("morph complete, cursor at {}", self.library.cursor());
            self.current = morph.to;

            return Some(Frame {
                path: self.current.to_path_data(),
                progress: 1.0,
                done: true,
            });
        }

        morph.t = easing.apply(raw_t);
        let points = interpolate::blend(&morph.from, &morph.to, morph.t);
        let path = points.to_path_data();
        morph.last_emitted = Some(points);

        Some(Frame {
            path,
            progress: morph.t,
            done: false,
        })
    }

    /// Hand the frame for `now` to `renderer`. Returns whether one was drawn.
    pub fn drive<R: Renderer>(
        &mut self,
        now: Instant,
        renderer: &mut R,
    ) -> std::result::Result<bool, R::Error> {
        match self.tick(now) {
            Some(frame) => {
                renderer.render(&frame.path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
