use mockito::{Matcher, Server, ServerGuard};
use tempfile::TempDir;

use vitality::bootstrap::wire_app;
use vitality::cli::{Commands, IntakeArgs};
use vitality::dispatch;
use vt_app::App;
use vt_core::config::{AppConfig, StorageBackend};
use vt_platform::{AppDirs, DirsAppDirsAdapter};

struct Env {
    server: ServerGuard,
    config: AppConfig,
    dirs: AppDirs,
    _root: TempDir,
}

impl Env {
    async fn new() -> Self {
        let root = TempDir::new().expect("temp dir");
        let server = Server::new_async().await;
        let config = AppConfig {
            api_base_url: server.url(),
            request_timeout_secs: 5,
            storage_backend: StorageBackend::File,
            data_dir: Some(root.path().join("data")),
        };
        let dirs = DirsAppDirsAdapter::with_base_dir(root.path().to_path_buf())
            .get_app_dirs()
            .expect("app dirs");
        Self {
            server,
            config,
            dirs,
            _root: root,
        }
    }

    /// A fresh process: new app over the same credential store.
    fn launch(&self) -> App {
        let app = wire_app(&self.config, &self.dirs).expect("wire app");
        app.start();
        app
    }
}

async fn run(app: &App, command: Commands) -> anyhow::Result<String> {
    let mut out = Vec::new();
    dispatch(app, &mut out, command).await?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

fn intake_args(age: &str) -> IntakeArgs {
    IntakeArgs {
        age: age.to_string(),
        height: "170".to_string(),
        weight: "70".to_string(),
        gender: None,
        activity: None,
        goal: None,
        diet: None,
    }
}

async fn login(env: &mut Env) -> App {
    env.server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"access_token":"tok-42","user_id":42,"username":"alice"}"#)
        .create_async()
        .await;

    let app = env.launch();
    let output = run(
        &app,
        Commands::Login {
            username: "alice".into(),
            password: "password123".into(),
        },
    )
    .await
    .expect("login");
    assert!(output.contains("Signed in as user 42"));
    app
}

#[tokio::test]
async fn cli_flow_signed_out_commands_are_guarded() {
    let env = Env::new().await;
    let app = env.launch();

    let status = run(&app, Commands::Status { json: false }).await.expect("status");
    assert!(status.contains("Not signed in."));
    assert!(status.contains("/login"));

    let err = run(&app, Commands::Intake(intake_args("30")))
        .await
        .expect_err("guarded");
    assert!(err.to_string().contains("not signed in"));
}

#[tokio::test]
async fn cli_flow_session_survives_restart() {
    let mut env = Env::new().await;
    login(&mut env).await;

    let app = env.launch();
    let status = run(&app, Commands::Status { json: true }).await.expect("status");
    let value: serde_json::Value = serde_json::from_str(&status).expect("json status");
    assert_eq!(value["authenticated"], true);
    assert_eq!(value["user_id"], 42);
    assert_eq!(value["location"], "predict");
}

#[tokio::test]
async fn cli_flow_intake_tolerates_training_failure() {
    let mut env = Env::new().await;
    let app = login(&mut env).await;

    let profile = env
        .server
        .mock("POST", "/diet")
        .match_header("authorization", "Bearer tok-42")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "user_id": 42,
            "age": 30,
            "gender": "Male",
            "activity_level": "Moderate"
        })))
        .with_status(201)
        .with_body(r#"{"message":"Diet data saved successfully","diet_id":1}"#)
        .create_async()
        .await;
    let training = env
        .server
        .mock("POST", "/train_model")
        .with_status(500)
        .with_body(r#"{"detail":"No training data available"}"#)
        .create_async()
        .await;
    let prediction = env
        .server
        .mock("POST", "/predict_food")
        .match_header("authorization", "Bearer tok-42")
        .with_status(200)
        .with_body(r#"{"predicted_diet":"predicted_diet: Balanced"}"#)
        .create_async()
        .await;

    let output = run(&app, Commands::Intake(intake_args("30")))
        .await
        .expect("intake");

    assert!(output.contains("Your Personalized Diet Plan"));
    assert!(output.contains("Recommended diet: Balanced"));
    profile.assert_async().await;
    training.assert_async().await;
    prediction.assert_async().await;
}

#[tokio::test]
async fn cli_flow_invalid_intake_sends_nothing() {
    let mut env = Env::new().await;
    let app = login(&mut env).await;

    let profile = env
        .server
        .mock("POST", "/diet")
        .expect(0)
        .create_async()
        .await;

    let err = run(&app, Commands::Intake(intake_args("")))
        .await
        .expect_err("validation");
    assert!(format!("{err:#}").contains("Please fill in all required fields"));
    profile.assert_async().await;
}

#[tokio::test]
async fn cli_flow_profile_failure_stops_chain() {
    let mut env = Env::new().await;
    let app = login(&mut env).await;

    env.server
        .mock("POST", "/diet")
        .with_status(500)
        .create_async()
        .await;
    let training = env
        .server
        .mock("POST", "/train_model")
        .expect(0)
        .create_async()
        .await;

    let err = run(&app, Commands::Intake(intake_args("30")))
        .await
        .expect_err("profile failure");
    assert!(format!("{err:#}").contains("Failed to get prediction. Please try again."));
    training.assert_async().await;
}

#[tokio::test]
async fn cli_flow_empty_dashboard() {
    let mut env = Env::new().await;
    let app = login(&mut env).await;

    env.server
        .mock("GET", "/diet")
        .with_status(404)
        .with_body(r#"{"message":"No diet records found for this user"}"#)
        .create_async()
        .await;

    let output = run(&app, Commands::Dashboard { json: false })
        .await
        .expect("dashboard");
    assert!(output.contains("No profiles submitted yet"));
}

#[tokio::test]
async fn cli_flow_logout_forgets_session() {
    let mut env = Env::new().await;
    let app = login(&mut env).await;

    let output = run(&app, Commands::Logout).await.expect("logout");
    assert!(output.contains("Signed out."));

    let fresh = env.launch();
    assert!(!fresh.session().session().is_authenticated());
    let err = run(&fresh, Commands::Dashboard { json: false })
        .await
        .expect_err("guarded");
    assert!(err.to_string().contains("not signed in"));
}

#[tokio::test]
async fn cli_flow_register_then_meals_requires_login() {
    let mut env = Env::new().await;
    env.server
        .mock("POST", "/register")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "bob",
            "password": "longpassword"
        })))
        .with_status(201)
        .with_body(r#"{"message":"User created successfully."}"#)
        .create_async()
        .await;

    let app = env.launch();
    let output = run(
        &app,
        Commands::Register {
            username: " bob ".into(),
            password: "longpassword".into(),
            confirm_password: None,
        },
    )
    .await
    .expect("register");
    assert!(output.contains("Account created"));

    assert!(run(&app, Commands::Meals { category: None }).await.is_err());
}
