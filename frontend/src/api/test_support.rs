#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-process stand-in for the script endpoint, keyed by `?action=`.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<RecordedCall>,
    }

    #[derive(Clone)]
    struct Route {
        action: String,
        response: MockResponse,
    }

    #[derive(Clone, Debug)]
    pub struct RecordedCall {
        pub action: String,
        pub form: Vec<(String, String)>,
    }

    impl RecordedCall {
        pub fn field(&self, name: &str) -> Option<&str> {
            self.form
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let action = when.action.clone().expect("mock requires action");
            let response = MockResponse::json(
                then.status.unwrap_or(200),
                then.body.unwrap_or_else(|| serde_json::json!({})),
            );

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route { action, response });
        }

        pub fn received(&self, action: &str) -> Vec<RecordedCall> {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .received
                .iter()
                .filter(|call| call.action == action)
                .cloned()
                .collect()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let action = request
                .url()
                .query_pairs()
                .find(|(key, _)| key == "action")
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default();
            let form = request
                .body()
                .and_then(|body| body.as_bytes())
                .map(|bytes| serde_urlencoded::from_bytes::<Vec<(String, String)>>(bytes))
                .transpose()
                .map_err(|e| ApiError::unknown(format!("mock body: {}", e)))?
                .unwrap_or_default();

            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(RecordedCall {
                action: action.clone(),
                form,
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.action == action)
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::unknown(format!("No mock for action {}", action)))
        }
    }

    #[derive(Default)]
    pub struct When {
        action: Option<String>,
    }

    impl When {
        pub fn action(&mut self, action: &str) -> &mut Self {
            self.action = Some(action.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }
}
