//! Core domain: events for run flow.

use bevy::ecs::message::Message;

/// Event fired once each time the run concludes (finished flips to true)
#[derive(Debug)]
pub struct RunFinishedEvent;

impl Message for RunFinishedEvent {}

/// Event fired when the post-finish delay elapses and physics is frozen
#[derive(Debug)]
pub struct FinishPauseElapsedEvent;

impl Message for FinishPauseElapsedEvent {}
