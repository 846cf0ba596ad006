//! # Custody-Chain Node
//!
//! Composition root wiring the three subsystems over an in-memory
//! substrate, then driving a demonstration custody chain.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (from env)
//! 2. Build the substrate adapters (commit store, event sink, clock)
//! 3. Initialize subsystems in dependency order:
//!    Facility Registry (1) → Container Ledger (2) → Handoff Coordinator (3)
//! 4. Seed demonstration facilities and a container
//! 5. Run an owner → terminal → depot custody chain
//!
//! ## Wiring
//!
//! ```text
//! HandoffCoordinator(3) ──LedgerGateway──→ ContainerLedger(2)
//!                                               │
//!                              FacilityDirectory│CommitStore
//!                                               ↓
//!                          FacilityRegistry(1)  InMemoryCommitStore
//! ```

use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use tracing::info;

use cc_01_facility_registry::{FacilityRegistryApi, FacilityRegistryService};
use cc_02_container_ledger::adapters::{
    InMemoryCommitStore, RecordingEventSink, RegistryDirectory,
};
use cc_02_container_ledger::{ContainerLedgerApi, ContainerLedgerService, LedgerConfig};
use cc_03_handoff_coordinator::adapters::DirectLedgerGateway;
use cc_03_handoff_coordinator::{
    CorrelationStore, HandoffCoordinatorApi, HandoffCoordinatorService, WriteAuthority,
};
use custody_telemetry::{init_telemetry, TelemetryConfig};
use shared_types::{FacilityType, PartyId, SystemTimeSource, UnitNumber};

/// Demonstration identity: one tag byte, padded.
fn party(tag: u8) -> PartyId {
    let mut bytes = [0u8; 20];
    bytes[19] = tag;
    PartyId::new(bytes)
}

const ONE_DAY_SECS: u64 = 86_400;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let admin = party(0x01);
    let shipping_line = party(0xA1);
    let terminal = party(0xB1);
    let depot = party(0xC1);

    // Substrate adapters.
    let clock = Arc::new(SystemTimeSource);
    let store = Arc::new(InMemoryCommitStore::new());
    let events = Arc::new(RecordingEventSink::new());

    // Subsystem 1: Facility Registry.
    let registry = Arc::new(FacilityRegistryService::new(admin, Arc::clone(&clock)));

    // Subsystem 2: Container Ledger.
    let ledger = Arc::new(ContainerLedgerService::new(
        admin,
        LedgerConfig::default(),
        Arc::clone(&store),
        Arc::new(RegistryDirectory::new(Arc::clone(&registry))),
        Arc::clone(&events),
        Arc::clone(&clock),
    ));

    // Subsystem 3: Handoff Coordinator, with write authority configured.
    let coordinator = HandoffCoordinatorService::new(
        Arc::new(DirectLedgerGateway::new(Arc::clone(&ledger))),
        Arc::new(CorrelationStore::new()),
        Arc::clone(&clock),
        Some(WriteAuthority::new(admin)),
    );

    info!("subsystems wired; seeding demonstration data");

    // Facilities.
    registry
        .register_facility(
            admin,
            terminal,
            "USLAX-APM",
            FacilityType::Terminal,
            "APM Terminals Los Angeles",
            "Los Angeles, CA",
        )
        .context("failed to register terminal")?;
    registry
        .register_facility(
            admin,
            depot,
            "USLAX-DEPOT1",
            FacilityType::Depot,
            "LA Container Depot",
            "Los Angeles, CA",
        )
        .context("failed to register depot")?;

    // Container.
    let unit_number = UnitNumber::parse("MSCU1234567").context("invalid demo unit number")?;
    let token_id = ledger
        .register_container(
            admin,
            shipping_line,
            unit_number.clone(),
            "22G1",
            "MSK",
            2200,
            30480,
        )
        .await
        .context("failed to register container")?;
    info!(%token_id, %unit_number, "container registered");

    // Leg 1: shipping line -> terminal.
    let initiated = coordinator
        .initiate(shipping_line, unit_number.as_str(), terminal, ONE_DAY_SECS, None)
        .await
        .context("failed to initiate first handoff")?;
    info!(
        booking_reference = %initiated.booking_reference,
        "handoff initiated: shipping line -> terminal"
    );

    if let Some(status) = coordinator.status(unit_number.as_str()).await? {
        info!(?status.status, to = %status.to, "pending handoff status");
    }

    coordinator
        .confirm(
            terminal,
            unit_number.as_str(),
            &initiated.booking_reference,
            "Yard A, Row 5, Slot 12",
        )
        .await
        .context("terminal failed to confirm")?;

    // Leg 2: terminal -> depot. The possessor initiates the next leg.
    let initiated = coordinator
        .initiate(terminal, unit_number.as_str(), depot, ONE_DAY_SECS, None)
        .await
        .context("failed to initiate second handoff")?;
    coordinator
        .confirm(
            depot,
            unit_number.as_str(),
            &initiated.booking_reference,
            "Storage Bay 12",
        )
        .await
        .context("depot failed to confirm")?;

    // Final state.
    let holder = ledger.user_of(token_id).await?;
    let owner = ledger.owner_of(token_id).await?;
    info!(
        %holder,
        %owner,
        containers = ledger.total_containers().await?,
        facilities = registry.facility_count(),
        events = events.recorded().len(),
        "custody chain complete"
    );
    ensure!(holder == depot, "expected the depot to hold the container");
    ensure!(owner == shipping_line, "legal ownership must never move");

    Ok(())
}
