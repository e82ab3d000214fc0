// 模拟设备：通过自签名证书提供 HTTPS 命令接口，记录收到的命令
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
};
use axum_server::Handle;
use axum_server::tls_rustls::{RustlsConfig, from_tcp_rustls};

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: "OK".to_string(),
            delay: None,
        }
    }
}

#[derive(Clone, Default)]
struct MockState {
    commands: Arc<Mutex<Vec<String>>>,
    replies: Arc<Mutex<HashMap<String, Reply>>>,
}

pub struct MockDevice {
    /// 形如 127.0.0.1:PORT 的设备地址
    pub host: String,
    state: MockState,
    handle: Handle,
}

impl MockDevice {
    pub async fn start() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let cert = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
        let tls = RustlsConfig::from_pem(
            cert.serialize_pem().unwrap().into_bytes(),
            cert.serialize_private_key_pem().into_bytes(),
        )
        .await
        .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let host = listener.local_addr().unwrap().to_string();

        let state = MockState::default();
        let app = Router::new()
            .route("/httpapi.asp", get(httpapi))
            .with_state(state.clone());

        let handle = Handle::new();
        let server = from_tcp_rustls(listener, tls).handle(handle.clone());
        tokio::spawn(async move {
            let _ = server.serve(app.into_make_service()).await;
        });

        Self {
            host,
            state,
            handle,
        }
    }

    /// 为指定命令设置响应
    pub fn reply(&self, command: &str, status: u16, body: &str) {
        self.set_reply(
            command,
            Reply {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
                delay: None,
            },
        );
    }

    /// 为指定命令设置延迟响应
    pub fn reply_after(&self, command: &str, delay: Duration) {
        self.set_reply(
            command,
            Reply {
                delay: Some(delay),
                ..Default::default()
            },
        );
    }

    fn set_reply(&self, command: &str, reply: Reply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(command.to_string(), reply);
    }

    /// 已收到的命令（按到达顺序）
    pub fn commands(&self) -> Vec<String> {
        self.state.commands.lock().unwrap().clone()
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

async fn httpapi(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, String) {
    let query = query.unwrap_or_default();
    let command = query.strip_prefix("command=").unwrap_or(&query).to_string();

    state.commands.lock().unwrap().push(command.clone());
    let reply = state
        .replies
        .lock()
        .unwrap()
        .get(&command)
        .cloned()
        .unwrap_or_default();

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (reply.status, reply.body)
}
