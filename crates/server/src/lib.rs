use std::time::Duration;

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use stickfight_shared::*;
use stickfight_sim::{render_frame, DrawList, MatchState};
use tokio::time::MissedTickBehavior;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Serde types for WebSocket messages
// ---------------------------------------------------------------------------

/// Events the browser client sends during a session.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage {
    KeyDown { code: String },
    KeyUp { code: String },
    Resize { width: f32, height: f32 },
}

/// A single rendered frame streamed to the client.
#[derive(Debug, Serialize)]
struct FrameMessage {
    #[serde(rename = "type")]
    msg_type: &'static str,
    tick: u32,
    ops: Vec<DrawOp>,
}

/// Error message sent to the client.
#[derive(Debug, Serialize)]
struct ErrorMessage {
    #[serde(rename = "type")]
    msg_type: &'static str,
    error: String,
}

/// Key bindings payload for GET /api/controls.
#[derive(Debug, Serialize)]
struct ControlsPayload {
    fighters: Vec<FighterBindings>,
}

#[derive(Debug, Serialize)]
struct FighterBindings {
    color: &'static str,
    scheme: ControlScheme,
}

// ---------------------------------------------------------------------------
// HTTP / WebSocket handlers
// ---------------------------------------------------------------------------

/// GET /api/controls -- key bindings and colors for both fighters.
async fn get_controls() -> Json<ControlsPayload> {
    let [s0, s1] = ControlScheme::default_pair();
    Json(ControlsPayload {
        fighters: vec![
            FighterBindings {
                color: FIGHTER_COLORS[0],
                scheme: s0,
            },
            FighterBindings {
                color: FIGHTER_COLORS[1],
                scheme: s1,
            },
        ],
    })
}

/// GET /api/spawn -- starting fighter snapshots.
async fn get_spawn() -> Json<serde_json::Value> {
    let state = MatchState::new();
    let snap = state.snapshot();
    Json(serde_json::json!({ "fighters": snap.fighters }))
}

/// GET /api/match -- WebSocket upgrade endpoint.
async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

/// Run one interactive session: key and resize events in, rendered frames
/// out at the fixed tick rate, until the client disconnects.
///
/// Input and simulation share this task, so the key map has exactly one
/// owner and each tick reads one consistent snapshot. A knockout does not
/// stop the loop; fighters keep moving at zero health.
async fn handle_socket(mut socket: WebSocket) {
    let mut state = MatchState::new();

    let mut ticker = tokio::time::interval(Duration::from_micros(TICK_DURATION_US));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("session started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                state.step();

                let mut frame = DrawList::new();
                render_frame(&mut frame, &state);

                let msg = FrameMessage {
                    msg_type: "frame",
                    tick: state.tick,
                    ops: frame.into_ops(),
                };
                let json = match serde_json::to_string(&msg) {
                    Ok(j) => j,
                    Err(_) => continue,
                };
                if socket.send(Message::Text(json.into())).await.is_err() {
                    break; // client disconnected
                }
            }

            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(msg) => apply_client_message(&mut state, msg),
                            Err(e) => {
                                debug!("ignoring malformed client message: {}", e);
                                let _ = send_error(
                                    &mut socket,
                                    &format!("invalid message JSON: {e}"),
                                )
                                .await;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
        }
    }

    info!("session ended at tick {}", state.tick);
}

/// Apply one client event to the session state.
fn apply_client_message(state: &mut MatchState, msg: ClientMessage) {
    match msg {
        ClientMessage::KeyDown { code } => state.input.press(&code),
        ClientMessage::KeyUp { code } => state.input.release(&code),
        ClientMessage::Resize { width, height } => {
            // Ignore degenerate sizes.
            if width > 0.0 && height > 0.0 {
                state.set_bounds(Bounds::new(width, height));
            }
        }
    }
}

/// Send a JSON error message over the WebSocket.
async fn send_error(socket: &mut WebSocket, error: &str) -> Result<(), axum::Error> {
    let msg = ErrorMessage {
        msg_type: "error",
        error: error.to_string(),
    };
    let json = serde_json::to_string(&msg).unwrap_or_default();
    socket.send(Message::Text(json.into())).await
}

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Build the axum `Router`.
pub fn app() -> Router {
    Router::new()
        .route("/api/controls", get(get_controls))
        .route("/api/spawn", get(get_spawn))
        .route("/api/match", get(ws_handler))
        .layer(CorsLayer::permissive())
}

/// Start the server on the given port.
pub async fn run_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = app();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("stickfight server listening on port {}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
