#![cfg(not(feature = "hydrate"))]

use super::*;

const STYLESHEET: &str = include_str!("../../../style/portfolio.css");

fn print_block() -> &'static str {
    let start = STYLESHEET.find("@media print").expect("stylesheet has a print block");
    &STYLESHEET[start..]
}

#[test]
fn print_is_unavailable_outside_the_browser() {
    assert_eq!(print_page(), PrintOutcome::Unavailable);
}

#[test]
fn print_is_repeatable_noop() {
    assert_eq!(print_page(), print_page());
}

#[test]
fn print_rules_hide_everything_but_the_resume() {
    let block = print_block();
    assert!(block.contains("main > :not(#resume)"));
    assert!(block.contains(".print-hidden"));
    assert!(block.contains("display: none"));
}

#[test]
fn print_hiding_is_scoped_to_print_media() {
    let before_print = &STYLESHEET[..STYLESHEET.find("@media print").unwrap_or(0)];
    assert!(!before_print.contains(":not(#resume)"));
}

#[test]
fn only_a_requested_dialog_counts_as_available() {
    assert!(PrintOutcome::Requested.is_available());
    assert!(!PrintOutcome::Unavailable.is_available());
    assert!(!print_page().is_available());
}
