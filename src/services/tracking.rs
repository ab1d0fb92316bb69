use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::core::ranker::nearest_airports;
use crate::models::{PositionFix, RankedAirport};
use crate::services::providers::AirportCatalog;

/// Errors that can occur with a position source
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("Position source is not active")]
    NotActive,

    #[error("Position source was cancelled")]
    Cancelled,
}

/// Lifecycle of a position source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Idle,
    Active,
    Stopped,
    Cancelled,
}

/// Geolocation capability injected by the host application
///
/// Fixes are delivered through a watch channel: subscribers always see the
/// latest fix, intermediate fixes may be skipped. `stop` pauses delivery and
/// can be undone by `start`; `cancel` closes the channel for good.
pub trait PositionSource: Send {
    fn start(&mut self) -> Result<watch::Receiver<Option<PositionFix>>, TrackingError>;
    fn stop(&mut self);
    fn cancel(&mut self);
    fn state(&self) -> TrackingState;

    fn is_active(&self) -> bool {
        self.state() == TrackingState::Active
    }
}

/// Position source fed by hand, for simulators and tests
#[derive(Debug)]
pub struct ManualPositionSource {
    sender: Option<watch::Sender<Option<PositionFix>>>,
    state: TrackingState,
}

impl ManualPositionSource {
    pub fn new() -> Self {
        Self {
            sender: None,
            state: TrackingState::Idle,
        }
    }

    /// Publish a fix to every subscriber
    pub fn push(&self, fix: PositionFix) -> Result<(), TrackingError> {
        match (self.state, &self.sender) {
            (TrackingState::Active, Some(sender)) => {
                sender.send_replace(Some(fix));
                Ok(())
            }
            (TrackingState::Cancelled, _) => Err(TrackingError::Cancelled),
            _ => Err(TrackingError::NotActive),
        }
    }
}

impl Default for ManualPositionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSource for ManualPositionSource {
    fn start(&mut self) -> Result<watch::Receiver<Option<PositionFix>>, TrackingError> {
        if self.state == TrackingState::Cancelled {
            return Err(TrackingError::Cancelled);
        }

        let sender = self.sender.get_or_insert_with(|| watch::channel(None).0);
        let receiver = sender.subscribe();
        self.state = TrackingState::Active;

        tracing::info!("Position tracking started");
        Ok(receiver)
    }

    fn stop(&mut self) {
        if self.state == TrackingState::Active {
            self.state = TrackingState::Stopped;
            tracing::info!("Position tracking stopped");
        }
    }

    fn cancel(&mut self) {
        // Dropping the sender closes every subscriber's channel
        self.sender = None;
        self.state = TrackingState::Cancelled;
        tracing::info!("Position tracking cancelled");
    }

    fn state(&self) -> TrackingState {
        self.state
    }
}

/// Recompute the nearest airports each time a new fix arrives
///
/// Runs until the position channel closes or the `updates` receiver is
/// dropped.
pub async fn follow_nearest_airports<C>(
    mut positions: watch::Receiver<Option<PositionFix>>,
    catalog: Arc<C>,
    limit: usize,
    updates: mpsc::Sender<Vec<RankedAirport>>,
) where
    C: AirportCatalog + ?Sized,
{
    loop {
        if positions.changed().await.is_err() {
            tracing::info!("Position channel closed, no more nearest-airport updates");
            break;
        }

        let latest = *positions.borrow_and_update();
        let Some(fix) = latest else {
            continue;
        };

        let ranked = nearest_airports(fix.coordinate, catalog.airports(), limit);
        tracing::debug!(
            "Fix at ({}, {}) -> {} nearby airports",
            fix.coordinate.latitude,
            fix.coordinate.longitude,
            ranked.len()
        );

        if updates.send(ranked).await.is_err() {
            tracing::debug!("Nearest-airport listener hung up");
            break;
        }
    }
}
