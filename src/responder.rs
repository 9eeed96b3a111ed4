use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// The one thing Ella says.
pub const ELLA_REPLY: &str = "I'm Ella – here to support your fitness, mental clarity, and calm. Stay grounded, breathe deep, and let's move forward together.";

/// Produces the reply for a user message. Input is accepted for the call
/// shape but does not influence the answer.
pub fn canned_reply(_input: &str) -> &'static str {
    ELLA_REPLY
}

/// Schedules the one-shot delayed reply for an accepted send. Fire and
/// forget: no cancellation, no failure path.
pub fn schedule_reply(input: String, delay: Duration, tx: mpsc::Sender<String>) {
    tokio::spawn(async move {
        sleep(delay).await;
        let reply = canned_reply(&input);
        if tx.send(reply.to_string()).await.is_err() {
            log::debug!("reply channel closed before delivery");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    #[test]
    fn test_reply_is_constant_regardless_of_input() {
        assert_eq!(canned_reply("hello"), ELLA_REPLY);
        assert_eq!(canned_reply("how do I deadlift?"), canned_reply(""));
    }

    #[tokio::test]
    async fn test_schedule_reply_delivers_exactly_one_reply() {
        let (tx, mut rx) = mpsc::channel(8);
        schedule_reply("hello".to_string(), Duration::from_millis(10), tx);

        let reply = rx.recv().await.expect("reply should arrive");
        assert_eq!(reply, ELLA_REPLY);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[tokio::test]
    async fn test_schedule_reply_waits_for_the_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let start = std::time::Instant::now();
        schedule_reply("hi".to_string(), Duration::from_millis(50), tx);

        rx.recv().await.expect("reply should arrive");
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
