use wire_ledger::domain::ports::WireTransfersBox;
use wire_ledger::infrastructure::in_memory::InMemoryBank;
use wire_ledger::infrastructure::sharded::ShardedBank;

#[tokio::test]
async fn test_banks_as_trait_objects() {
    let banks: Vec<WireTransfersBox> = vec![
        Box::new(InMemoryBank::new()),
        Box::new(ShardedBank::new()),
    ];

    // Verify Send + Sync by spawning tasks
    let mut handles = Vec::new();
    for bank in banks {
        handles.push(tokio::spawn(async move {
            bank.set_funds("foo", 100).await.unwrap();
            assert!(bank.transfer_funds(40, "foo", "bar").await.unwrap());
            (
                bank.funds("foo").await.unwrap(),
                bank.funds("bar").await.unwrap(),
            )
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), (60, 40));
    }
}
