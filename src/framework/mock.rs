//! # Mock Ledger
//!
//! A [`LedgerHandle`] whose requests are answered from a queue of scripted
//! expectations instead of a real ledger. Use it to test clients such as
//! [`CartPanel`](crate::clients::CartPanel) or
//! [`CatalogClient`](crate::clients::CatalogClient) deterministically.
//!
//! ```ignore
//! let mut mock = MockLedger::new();
//! mock.expect_add("bottle-200ml".into()).return_ok(line);
//! mock.expect_snapshot().return_ok(snapshot);
//!
//! let handle = mock.handle();
//! // Drive the client under test...
//! mock.verify(); // Ensures all expectations were met
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation panics the mock task, which the caller observes as
//! [`LedgerError::ActorDropped`].

use crate::cart_actor::UpdateOutcome;
use crate::checkout::CheckoutAck;
use crate::framework::{CartSnapshot, LedgerError, LedgerHandle, LedgerRequest};
use crate::model::{LineItem, ProductId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

enum Expectation {
    Add {
        id: ProductId,
        response: Result<LineItem, LedgerError>,
    },
    Update {
        id: ProductId,
        quantity: u32,
        response: Result<UpdateOutcome, LedgerError>,
    },
    Remove {
        id: ProductId,
        response: Result<Option<LineItem>, LedgerError>,
    },
    Snapshot {
        response: Result<CartSnapshot, LedgerError>,
    },
    Checkout {
        response: Result<CheckoutAck, LedgerError>,
    },
}

fn lock(queue: &Queue) -> MutexGuard<'_, VecDeque<Expectation>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct MockLedger {
    handle: LedgerHandle,
    expectations: Queue,
    _task: tokio::task::JoinHandle<()>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLedger {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (
                        LedgerRequest::AddItem { product, respond_to, .. },
                        Some(Expectation::Add { id, response }),
                    ) => {
                        assert_eq!(product.id, id, "AddItem for unexpected product");
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::UpdateQuantity {
                            id,
                            quantity,
                            respond_to,
                        },
                        Some(Expectation::Update {
                            id: expected_id,
                            quantity: expected_quantity,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected_id, "UpdateQuantity for unexpected product");
                        assert_eq!(
                            quantity, expected_quantity,
                            "UpdateQuantity with unexpected quantity"
                        );
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::RemoveItem { id, respond_to },
                        Some(Expectation::Remove {
                            id: expected_id,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected_id, "RemoveItem for unexpected product");
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Checkout { respond_to },
                        Some(Expectation::Checkout { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            handle: LedgerHandle::new(sender),
            expectations,
            _task: task,
        }
    }

    /// Returns a handle for the code under test.
    pub fn handle(&self) -> LedgerHandle {
        self.handle.clone()
    }

    pub fn expect_add(&mut self, id: ProductId) -> ExpectationBuilder<LineItem> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Add {
            id,
            response,
        })
    }

    pub fn expect_update(
        &mut self,
        id: ProductId,
        quantity: u32,
    ) -> ExpectationBuilder<UpdateOutcome> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update {
            id,
            quantity,
            response,
        })
    }

    pub fn expect_remove(&mut self, id: ProductId) -> ExpectationBuilder<Option<LineItem>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Remove {
            id,
            response,
        })
    }

    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<CartSnapshot> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Snapshot { response })
    }

    pub fn expect_checkout(&mut self) -> ExpectationBuilder<CheckoutAck> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Checkout { response })
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    make: Box<dyn FnOnce(Result<T, LedgerError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        expectations: &Queue,
        make: impl FnOnce(Result<T, LedgerError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            make: Box::new(make),
        }
    }

    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: LedgerError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, LedgerError>) {
        let expectation = (self.make)(response);
        lock(&self.expectations).push_back(expectation);
    }
}

/// Creates a handle and the receiver its requests arrive on, for tests that
/// want to inspect raw [`LedgerRequest`]s.
pub fn create_mock_handle(buffer_size: usize) -> (LedgerHandle, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerHandle::new(sender), receiver)
}
