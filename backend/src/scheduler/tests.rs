use chrono::NaiveDate;

use super::*;
use crate::models::{EventConstraints, Minutes, Phase, Reservation, Room};
use crate::repository::{ReservationLedger, RoomInventory};

fn room(building: &str, number: &str, capacity: u32, room_type: &str) -> Room {
    Room {
        building: building.to_string(),
        room: number.to_string(),
        capacity,
        computers_available: "0".to_string(),
        seating_available: capacity.to_string(),
        seating_type: "Movable".to_string(),
        food_allowed: "Yes".to_string(),
        priority: "1".to_string(),
        room_type: room_type.to_string(),
    }
}

fn booked(building: &str, number: &str, date: NaiveDate, start: ClockTime, len: Minutes) -> Reservation {
    Reservation {
        building: building.to_string(),
        room: number.to_string(),
        date,
        start,
        duration: len,
        booking_type: "Class".to_string(),
    }
}

fn inventory(rooms: Vec<Room>) -> RoomInventory {
    let mut inv = RoomInventory::new();
    for r in rooms {
        assert!(inv.add_room(r));
    }
    inv
}

fn constraints(start_hour: i32, duration: Minutes, attendees: u32) -> EventConstraints {
    EventConstraints::new(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        ClockTime::from_hm(start_hour, 0),
        duration,
        attendees,
    )
}

fn phases(plan: &SchedulePlan) -> Vec<Phase> {
    plan.segments.iter().map(|s| s.phase).collect()
}

#[test]
fn test_two_room_worked_example() {
    // Room A seats everyone; room B is the qualifying lab (10 * 10 >= 40).
    let inv = inventory(vec![
        room("B1", "1", 50, "Lecture Hall"),
        room("B1", "2", 10, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();
    let c = constraints(9, Minutes::hours(10), 40);

    let plan = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap();

    assert_eq!(phases(&plan), vec![Phase::Opening, Phase::Work, Phase::Closing]);

    let opening = &plan.segments[0];
    assert_eq!(opening.start, ClockTime::from_hm(9, 0));
    assert_eq!(opening.end, ClockTime::from_hm(10, 0));
    assert_eq!(opening.rooms.len(), 1);
    assert_eq!(opening.rooms[0].room, "1");

    let work = &plan.segments[1];
    assert_eq!(work.start, ClockTime::from_hm(10, 0));
    assert_eq!(work.end, ClockTime::from_hm(16, 0));
    assert!(work.rooms.iter().any(|r| r.room == "2"));

    let closing = &plan.segments[2];
    assert_eq!(closing.start, ClockTime::from_hm(16, 0));
    assert_eq!(closing.end, ClockTime::from_hm(19, 0));
    assert_eq!(closing.rooms[0].room, "1", "closing reuses the opening room");
}

#[test]
fn test_long_event_inserts_meal_cycles() {
    let inv = inventory(vec![
        room("Main", "10", 100, "Auditorium"),
        room("Main", "11", 40, "Conference Room"),
        room("Main", "12", 40, "Conference Room"),
        room("Annex", "20", 10, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();
    // 08:00 for 14 hours: opening 08-09, work 09-15, meal 15-16,
    // work 16-19, closing 19-22.
    let c = constraints(8, Minutes::hours(14), 60);

    let plan = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap();

    assert_eq!(
        phases(&plan),
        vec![Phase::Opening, Phase::Work, Phase::Meal, Phase::Work, Phase::Closing]
    );
    assert!(plan.is_contiguous());
    assert_eq!(
        plan.span().unwrap(),
        (ClockTime::from_hm(8, 0), ClockTime::from_hm(22, 0))
    );

    let meal = &plan.segments[2];
    assert_eq!(meal.duration(), Minutes::hours(1));
    assert!(meal.rooms.len() >= 2);
    let meal_capacity: u32 = meal.rooms.iter().map(|r| r.capacity).sum();
    assert!(meal_capacity >= 60);

    // Both work phases carry the qualifying lab and never the opening room.
    for work in [&plan.segments[1], &plan.segments[3]] {
        assert!(work
            .rooms
            .iter()
            .any(|r| r.is_computer_lab() && r.capacity * 10 >= 60));
        assert!(work.rooms.iter().all(|r| r.key() != ("Main", "10")));
    }
}

#[test]
fn test_reservation_displaces_opening_room() {
    let inv = inventory(vec![
        room("B1", "1", 50, "Lecture Hall"),
        room("B1", "3", 45, "Lecture Hall"),
        room("B1", "2", 10, "Computer Lab"),
    ]);
    let c = constraints(9, Minutes::hours(10), 40);

    let mut ledger = ReservationLedger::new();
    // Overlaps the 09:00-10:00 opening window of room 1.
    ledger.add_reservation(booked(
        "B1",
        "1",
        c.date,
        ClockTime::from_hm(9, 30),
        Minutes::hours(1),
    ));

    let plan = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap();
    assert_eq!(plan.segments[0].rooms[0].room, "3");
}

#[test]
fn test_closing_falls_back_when_opening_room_is_booked() {
    let inv = inventory(vec![
        room("B1", "1", 50, "Lecture Hall"),
        room("B1", "4", 60, "Lecture Hall"),
        room("B1", "2", 10, "Computer Lab"),
    ]);
    let c = constraints(9, Minutes::hours(10), 40);

    let mut ledger = ReservationLedger::new();
    // Inside the 16:00-19:00 closing window of the opening room.
    ledger.add_reservation(booked(
        "B1",
        "1",
        c.date,
        ClockTime::from_hm(16, 30),
        Minutes::hours(1),
    ));

    let plan = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap();
    let closing = plan.segments.last().unwrap();
    assert_eq!(closing.phase, Phase::Closing);
    assert_eq!(closing.rooms[0].room, "4");
}

#[test]
fn test_no_opening_candidate_is_infeasible() {
    // Everything is either too small or a computer lab.
    let inv = inventory(vec![
        room("B1", "1", 20, "Lecture Hall"),
        room("B1", "2", 100, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();
    let c = constraints(9, Minutes::hours(10), 40);

    let err = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap_err();
    assert_eq!(
        err,
        ScheduleError::Infeasible {
            phase: Phase::Opening,
            at: ClockTime::from_hm(9, 0),
        }
    );
}

#[test]
fn test_work_without_qualifying_lab_is_infeasible() {
    let inv = inventory(vec![
        room("B1", "1", 50, "Lecture Hall"),
        room("B1", "3", 45, "Lecture Hall"),
        // Lab exists but 3 * 10 < 40, so it never qualifies.
        room("B1", "2", 3, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();
    let c = constraints(9, Minutes::hours(10), 40);

    let err = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Infeasible {
            phase: Phase::Work,
            ..
        }
    ));
}

#[test]
fn test_meal_needs_two_distinct_rooms() {
    let inv = inventory(vec![
        room("B1", "1", 100, "Lecture Hall"),
        room("B1", "5", 200, "Cafeteria"),
        room("B1", "2", 10, "Computer Lab"),
    ]);
    let c = constraints(9, Minutes::hours(11), 60);

    let mut ledger = ReservationLedger::new();
    // The lab is busy during the 16:00-17:00 meal window, leaving only one
    // candidate meal room.
    ledger.add_reservation(booked(
        "B1",
        "2",
        c.date,
        ClockTime::from_hm(16, 0),
        Minutes::hours(1),
    ));

    let err = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Infeasible {
            phase: Phase::Meal,
            ..
        }
    ));
}

#[test]
fn test_window_too_short() {
    let inv = inventory(vec![
        room("B1", "1", 50, "Lecture Hall"),
        room("B1", "2", 10, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();

    for hours in [1, 3, 4] {
        let c = constraints(9, Minutes::hours(hours), 40);
        let err = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap_err();
        assert_eq!(
            err,
            ScheduleError::WindowTooShort {
                requested: Minutes::hours(hours),
            }
        );
    }
}

#[test]
fn test_duration_that_strands_a_half_hour_fails() {
    let inv = inventory(vec![
        room("Main", "10", 100, "Auditorium"),
        room("Main", "11", 40, "Conference Room"),
        room("Main", "12", 40, "Conference Room"),
        room("Annex", "20", 10, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();
    // 10.5 hours: after the 6-hour work block only 30 minutes remain before
    // the closing window, so the meal advance overshoots it.
    let c = constraints(9, Minutes::new(10 * 60 + 30), 60);

    let err = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap_err();
    assert!(matches!(err, ScheduleError::WindowArithmetic { .. }));
}

#[test]
fn test_assigned_rooms_never_collide_with_ledger() {
    let inv = inventory(vec![
        room("Main", "10", 100, "Auditorium"),
        room("Main", "11", 40, "Conference Room"),
        room("Main", "12", 40, "Conference Room"),
        room("Annex", "20", 10, "Computer Lab"),
    ]);
    let c = constraints(8, Minutes::hours(14), 60);

    let mut ledger = ReservationLedger::new();
    ledger.add_reservation(booked(
        "Main",
        "11",
        c.date,
        ClockTime::from_hm(9, 0),
        Minutes::hours(2),
    ));
    ledger.add_reservation(booked(
        "Annex",
        "20",
        c.date,
        ClockTime::from_hm(7, 0),
        Minutes::hours(1),
    ));

    let plan = PhaseScheduler::new(&inv, &ledger, &c).generate_plan().unwrap();

    let checker = CollisionChecker::new(&ledger);
    for segment in &plan.segments {
        for r in &segment.rooms {
            assert!(
                !checker.has_collision(r, c.date, segment.start, segment.duration()),
                "{} {} assigned into a reserved window",
                r.building,
                r.room
            );
        }
    }
}

#[test]
fn test_generate_plan_is_idempotent() {
    let inv = inventory(vec![
        room("Main", "10", 100, "Auditorium"),
        room("Main", "11", 40, "Conference Room"),
        room("Main", "12", 40, "Conference Room"),
        room("Annex", "20", 10, "Computer Lab"),
    ]);
    let ledger = ReservationLedger::new();
    let c = constraints(8, Minutes::hours(14), 60);

    let scheduler = PhaseScheduler::new(&inv, &ledger, &c);
    let first = scheduler.generate_plan().unwrap();
    let second = scheduler.generate_plan().unwrap();
    assert_eq!(first, second);
}
