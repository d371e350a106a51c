// Host-side tests for what a mount brings up.

#![allow(dead_code)]
mod plan {
    include!("../src/plan.rs");
}

use plan::MountPlan;

#[test]
fn cursor_runs_without_a_2d_context() {
    let p = MountPlan::new(false, true);
    assert!(!p.field);
    assert!(p.cursor);
    assert!(p.needs_loop());
}

#[test]
fn field_runs_without_a_cursor() {
    let p = MountPlan::new(true, false);
    assert!(p.field && !p.cursor);
    assert!(p.needs_loop());
}

#[test]
fn nothing_to_run_leaves_the_mount_inert() {
    assert!(!MountPlan::new(false, false).needs_loop());
    assert!(MountPlan::new(true, true).needs_loop());
}
