use super::*;

#[test]
fn second_claim_fails_while_ticket_alive() {
    let latch = SubmitLatch::new();
    let ticket = latch.try_begin();
    assert!(ticket.is_some());
    assert!(latch.is_submitting());
    assert!(latch.try_begin().is_none());

    drop(ticket);
    assert!(!latch.is_submitting());
    assert!(latch.try_begin().is_some());
}

#[test]
fn clones_share_the_latch() {
    let latch = SubmitLatch::new();
    let other = latch.clone();
    let _ticket = latch.try_begin().unwrap();
    assert!(other.try_begin().is_none());
}

#[tokio::test]
async fn cancelled_submission_releases_latch() {
    let latch = SubmitLatch::new();
    let held = latch.clone();
    let task = tokio::spawn(async move {
        let _ticket = held.try_begin().unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    });
    tokio::task::yield_now().await;
    while !latch.is_submitting() {
        tokio::task::yield_now().await;
    }

    task.abort();
    let _ = task.await;
    assert!(!latch.is_submitting());
}
