use crate::{Discipline, OverflowPolicy, RingOptions, SlotRing};

fn ring(discipline: Discipline) -> SlotRing {
    SlotRing::with_options(
        3,
        2,
        RingOptions {
            discipline,
            overflow_policy: OverflowPolicy::Reject,
        },
    )
    .unwrap()
}

#[test]
fn pop_from_empty_queue_fails_whole_request() {
    let mut r = ring(Discipline::Queue);
    let mut out = [0xEE; 4];
    assert_eq!(r.pop(&mut out, 2), 2);
    // Nothing was produced.
    assert_eq!(out, [0xEE; 4]);
}

#[test]
fn pop_from_empty_stack_fails_whole_request() {
    let mut r = ring(Discipline::Stack);
    let mut out = [0xEE; 2];
    assert_eq!(r.pop(&mut out, 1), 1);
    assert_eq!(out, [0xEE; 2]);
}

#[test]
fn queue_underflow_reports_the_shortfall() {
    let mut r = ring(Discipline::Queue);
    assert_eq!(r.push(&[1, 2, 3, 4], 2), 0);

    let mut out = [0u8; 10];
    assert_eq!(r.pop(&mut out, 5), 3);
    assert_eq!(&out[..4], &[1, 2, 3, 4]);
    assert!(r.is_empty());
}

#[test]
fn stack_underflow_reports_the_shortfall() {
    let mut r = ring(Discipline::Stack);
    assert_eq!(r.push(&[1, 2, 3, 4], 2), 0);

    let mut out = [0u8; 10];
    assert_eq!(r.pop(&mut out, 5), 3);
    assert_eq!(&out[..4], &[3, 4, 1, 2]);
    assert!(r.is_empty());
}

#[test]
fn buffer_is_usable_after_a_failed_pop() {
    let mut r = ring(Discipline::Queue);
    assert_eq!(r.push(&[9, 9], 1), 0);

    let mut out = [0u8; 6];
    assert_eq!(r.pop(&mut out, 3), 2);
    assert_eq!(&out[..2], &[9, 9]);

    // The cursors ended aligned: a fresh round trip behaves normally.
    assert_eq!(r.push(&[5, 6, 7, 8], 2), 0);
    assert_eq!(r.pop(&mut out, 2), 0);
    assert_eq!(&out[..4], &[5, 6, 7, 8]);
}

#[test]
fn failed_push_leaves_resident_elements_intact() {
    let mut r = ring(Discipline::Queue);
    assert_eq!(r.push(&[1, 1, 2, 2, 3, 3], 3), 0);

    // Repeated rejected pushes must not disturb the resident data.
    assert_eq!(r.push(&[4, 4, 5, 5], 2), 2);
    assert_eq!(r.push(&[6, 6], 1), 1);

    let mut out = [0u8; 6];
    assert_eq!(r.pop(&mut out, 3), 0);
    assert_eq!(out, [1, 1, 2, 2, 3, 3]);
}
