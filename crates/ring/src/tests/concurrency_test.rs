#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use crate::Ring;

    #[test]
    fn readers_never_see_partial_updates() {
        let ring = Ring::new_shared(64);
        ring.add_node("base:0");

        let writer = {
            let ring = ring.clone();
            thread::spawn(move || {
                for round in 0..200 {
                    let addr = format!("churn:{}", round % 7);
                    ring.add_node(&addr);
                    ring.remove_node(&addr);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|r| {
                let ring = ring.clone();
                thread::spawn(move || {
                    for i in 0..2_000 {
                        let key = format!("k:{r}:{i}");
                        assert!(ring.locate(&key).is_ok(), "lookup failed for {key}");
                        assert!(!ring.is_empty());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(ring.nodes(), vec!["base:0"]);
    }

    #[test]
    fn concurrent_adds_all_land() {
        let ring = Ring::new_shared(16);

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let ring = ring.clone();
                thread::spawn(move || ring.add_node(&format!("node:{n}")))
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(ring.nodes().len(), 8);
    }
}
