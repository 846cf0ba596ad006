//! # Integration Test Flows
//!
//! Tests that cc-01-facility-registry, cc-02-container-ledger, and
//! cc-03-handoff-coordinator work together correctly across a full
//! custody chain.
//!
//! ## Flows Tested
//!
//! 1. **Registry (1) → Ledger (2)**: destination gating follows the live
//!    facility records, including deactivation mid-chain
//! 2. **Coordinator (3) → Ledger (2)**: booking references are issued on
//!    committed initiates only and reconciled on confirm
//! 3. **Event stream**: every committed state change is observable in
//!    order through the event sink

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    // Subsystem 1: Facility Registry
    use cc_01_facility_registry::{FacilityRegistryApi, FacilityRegistryService};

    // Subsystem 2: Container Ledger
    use cc_02_container_ledger::adapters::{
        InMemoryCommitStore, RecordingEventSink, RegistryDirectory,
    };
    use cc_02_container_ledger::{
        ContainerLedgerApi, ContainerLedgerService, HandoffStatus, LedgerConfig, LedgerError,
        LedgerEvent,
    };

    // Subsystem 3: Handoff Coordinator
    use cc_03_handoff_coordinator::adapters::DirectLedgerGateway;
    use cc_03_handoff_coordinator::{
        CoordinatorError, CorrelationStore, HandoffCoordinatorApi, HandoffCoordinatorService,
        WriteAuthority,
    };

    use shared_types::{FacilityType, ManualTimeSource, PartyId, TokenId, UnitNumber};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ADMIN: PartyId = PartyId::new([0x01; 20]);
    const SHIPPING_LINE: PartyId = PartyId::new([0xA1; 20]);
    const TERMINAL_1: PartyId = PartyId::new([0xB1; 20]);
    const TERMINAL_2: PartyId = PartyId::new([0xB2; 20]);
    const DEPOT: PartyId = PartyId::new([0xC1; 20]);

    const UNIT: &str = "MSCU1234567";
    const DAY: u64 = 86_400;
    const GENESIS: u64 = 1_700_000_000;

    type Registry = FacilityRegistryService<ManualTimeSource>;
    type Ledger = ContainerLedgerService<
        InMemoryCommitStore,
        RegistryDirectory<Registry>,
        RecordingEventSink,
        ManualTimeSource,
    >;
    type Coordinator =
        HandoffCoordinatorService<DirectLedgerGateway<Ledger>, ManualTimeSource>;

    struct Stack {
        registry: Arc<Registry>,
        ledger: Arc<Ledger>,
        coordinator: Coordinator,
        events: Arc<RecordingEventSink>,
        clock: Arc<ManualTimeSource>,
    }

    /// Wire all three subsystems the way custody-node does, seeded with
    /// two terminals and a depot.
    async fn stack() -> Stack {
        let clock = Arc::new(ManualTimeSource::starting_at(GENESIS));
        let events = Arc::new(RecordingEventSink::new());
        let registry = Arc::new(FacilityRegistryService::new(ADMIN, Arc::clone(&clock)));

        for (address, code, name) in [
            (TERMINAL_1, "USLAX-APM", "APM Terminals Los Angeles"),
            (TERMINAL_2, "USLGB-TTI", "Total Terminals International"),
        ] {
            registry
                .register_facility(ADMIN, address, code, FacilityType::Terminal, name, "CA")
                .unwrap();
        }
        registry
            .register_facility(
                ADMIN,
                DEPOT,
                "USLAX-DEPOT1",
                FacilityType::Depot,
                "LA Container Depot",
                "Los Angeles, CA",
            )
            .unwrap();

        let ledger = Arc::new(ContainerLedgerService::new(
            ADMIN,
            LedgerConfig::default(),
            Arc::new(InMemoryCommitStore::new()),
            Arc::new(RegistryDirectory::new(Arc::clone(&registry))),
            Arc::clone(&events),
            Arc::clone(&clock),
        ));
        ledger
            .register_container(
                ADMIN,
                SHIPPING_LINE,
                UnitNumber::parse(UNIT).unwrap(),
                "22G1",
                "MSK",
                2200,
                30480,
            )
            .await
            .unwrap();

        let coordinator = HandoffCoordinatorService::new(
            Arc::new(DirectLedgerGateway::new(Arc::clone(&ledger))),
            Arc::new(CorrelationStore::new()),
            Arc::clone(&clock),
            Some(WriteAuthority::new(ADMIN)),
        );

        Stack {
            registry,
            ledger,
            coordinator,
            events,
            clock,
        }
    }

    // =============================================================================
    // FULL CUSTODY CHAIN
    // =============================================================================

    #[tokio::test]
    async fn test_documented_scenario_end_to_end() {
        let stack = stack().await;
        let token_id = TokenId::new(1);

        // Owner initiates toward terminal 1; a booking reference comes
        // back only after the commit.
        let initiated = stack
            .coordinator
            .initiate(SHIPPING_LINE, UNIT, TERMINAL_1, DAY, None)
            .await
            .unwrap();
        assert_eq!(initiated.token_id, token_id);
        assert!(initiated.booking_reference.starts_with("BK-MSCU-"));

        let status = stack.coordinator.status(UNIT).await.unwrap().unwrap();
        assert_eq!(status.status, HandoffStatus::Pending);
        assert_eq!(status.from, SHIPPING_LINE);
        assert_eq!(status.to, TERMINAL_1);

        // Terminal 1 confirms with the reference.
        stack
            .coordinator
            .confirm(TERMINAL_1, UNIT, &initiated.booking_reference, "Yard A")
            .await
            .unwrap();
        assert_eq!(stack.ledger.user_of(token_id).await.unwrap(), TERMINAL_1);
        assert_eq!(
            stack.ledger.owner_of(token_id).await.unwrap(),
            SHIPPING_LINE
        );

        // Terminal 1 hands off to terminal 2; confirming from terminal 1
        // now fails because the slot addresses terminal 2.
        let initiated = stack
            .coordinator
            .initiate(TERMINAL_1, UNIT, TERMINAL_2, DAY, None)
            .await
            .unwrap();
        let err = stack
            .coordinator
            .confirm(TERMINAL_1, UNIT, &initiated.booking_reference, "Yard A")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoordinatorError::Ledger(LedgerError::NotAuthorizedFacility {
                address: TERMINAL_1
            })
        );

        // Terminal 2 takes the container, then forwards it to the depot.
        stack
            .coordinator
            .confirm(TERMINAL_2, UNIT, &initiated.booking_reference, "Gate 4")
            .await
            .unwrap();
        let initiated = stack
            .coordinator
            .initiate(TERMINAL_2, UNIT, DEPOT, DAY, None)
            .await
            .unwrap();
        stack
            .coordinator
            .confirm(DEPOT, UNIT, &initiated.booking_reference, "Storage Bay 12")
            .await
            .unwrap();

        // Final custody: depot holds, ownership never moved.
        assert_eq!(stack.ledger.user_of(token_id).await.unwrap(), DEPOT);
        assert_eq!(
            stack.ledger.owner_of(token_id).await.unwrap(),
            SHIPPING_LINE
        );
    }

    #[tokio::test]
    async fn test_event_stream_mirrors_committed_changes() {
        let stack = stack().await;

        let initiated = stack
            .coordinator
            .initiate(SHIPPING_LINE, UNIT, TERMINAL_1, DAY, None)
            .await
            .unwrap();
        stack
            .coordinator
            .confirm(TERMINAL_1, UNIT, &initiated.booking_reference, "Yard A")
            .await
            .unwrap();

        let events = stack.events.recorded();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], LedgerEvent::ContainerRegistered(_)));
        assert!(matches!(events[1], LedgerEvent::HandoffInitiated(_)));
        assert!(matches!(events[2], LedgerEvent::PossessionConfirmed(_)));
    }

    // =============================================================================
    // REGISTRY-DRIVEN DESTINATION GATING
    // =============================================================================

    #[tokio::test]
    async fn test_deactivated_facility_blocks_new_legs() {
        let stack = stack().await;

        // First leg lands at terminal 1.
        let initiated = stack
            .coordinator
            .initiate(SHIPPING_LINE, UNIT, TERMINAL_1, DAY, None)
            .await
            .unwrap();
        stack
            .coordinator
            .confirm(TERMINAL_1, UNIT, &initiated.booking_reference, "Yard A")
            .await
            .unwrap();

        // The depot is deactivated before the next leg.
        stack.registry.set_active(ADMIN, DEPOT, false).unwrap();
        let err = stack
            .coordinator
            .initiate(TERMINAL_1, UNIT, DEPOT, DAY, None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoordinatorError::Ledger(LedgerError::NotAuthorizedFacility { address: DEPOT })
        );

        // Reactivation restores it.
        stack.registry.set_active(ADMIN, DEPOT, true).unwrap();
        stack
            .coordinator
            .initiate(TERMINAL_1, UNIT, DEPOT, DAY, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unregistered_destination_rejected_through_stack() {
        let stack = stack().await;
        let stranger = PartyId::new([0xEE; 20]);

        let err = stack
            .coordinator
            .initiate(SHIPPING_LINE, UNIT, stranger, DAY, None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoordinatorError::Ledger(LedgerError::NotAuthorizedFacility { address: stranger })
        );
    }

    // =============================================================================
    // EXPIRY POLICY
    // =============================================================================

    #[tokio::test]
    async fn test_late_confirm_tolerated_with_default_policy() {
        let stack = stack().await;

        let initiated = stack
            .coordinator
            .initiate(SHIPPING_LINE, UNIT, TERMINAL_1, DAY, None)
            .await
            .unwrap();

        // Confirmation lands a week late; the reference behavior accepts it.
        stack.clock.advance(7 * DAY);
        stack
            .coordinator
            .confirm(TERMINAL_1, UNIT, &initiated.booking_reference, "Yard A")
            .await
            .unwrap();
        assert_eq!(
            stack.ledger.user_of(TokenId::new(1)).await.unwrap(),
            TERMINAL_1
        );
    }
}
