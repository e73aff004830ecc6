//! Hitobject model for [osu!]catch.
//!
//! ## Description
//!
//! Turns a beatmap's hitobjects into catch objects and derives everything
//! that gameplay, rendering, and difficulty calculation need from them:
//!   - time preempt and scale from the approach rate and circle size
//!   - position offsets (bananas, tiny droplets, and hard rock)
//!   - combo information
//!   - hyperdash links between consecutive objects
//!
//! The behaviour follows [osu!lazer]'s `CatchHitObject` and
//! `CatchBeatmapProcessor`.
//!
//! ## Usage
//!
//! ```
//! use rosu_catch::{
//!     catch::CatchBeatmapProcessor,
//!     model::{beatmap::Beatmap, hit_object::HitObject},
//! };
//!
//! let map = Beatmap {
//!     ar: 9.0,
//!     cs: 4.0,
//!     hit_objects: vec![
//!         HitObject::fruit(100.0, 1000.0).with_new_combo(0),
//!         HitObject::fruit(150.0, 1300.0),
//!         HitObject::fruit(500.0, 1400.0),
//!     ],
//! };
//!
//! // Apply defaults based on the map's difficulty and hard rock
//! let attrs = map.attributes().mods(16).build();
//! let mut catch_map = map.to_catch_with(&attrs).unwrap();
//!
//! // Offsets, combos, and hyperdashes require the full object sequence
//! let combo_changes = CatchBeatmapProcessor::new()
//!     .mods(16)
//!     .process(&mut catch_map);
//!
//! for h in catch_map.iter() {
//!     println!(
//!         "x={} preempt={} hyperdash={}",
//!         h.x(),
//!         h.time_preempt(),
//!         h.hyper_dash()
//!     );
//! }
//!
//! for change in combo_changes.iter() {
//!     println!("{}: {:?} -> {:?}", change.idx, change.old, change.new);
//! }
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Invalid beatmaps are logged through `tracing::error` and processing summaries through `tracing::debug`. | [`tracing`]
//! | `serde` | Implements `Serialize` and `Deserialize` for the object model. `CatchBeatmap` is only `Serialize` since it must be built through validation. | [`serde`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [osu!lazer]: https://github.com/ppy/osu
//! [`tracing`]: https://docs.rs/tracing
//! [`serde`]: https://docs.rs/serde

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    catch::{CatchBeatmap, CatchBeatmapError, CatchBeatmapProcessor, CatchHitObject},
    model::beatmap::Beatmap,
};

/// Types for the osu!catch object model.
pub mod catch;

/// Types used in and around this crate.
pub mod model;

mod util;
