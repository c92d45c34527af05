#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use image_compression_app::{
    routes::configure_routes,
    server::cors::build_cors,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use std::{net::TcpListener, time::Duration};

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new());
        let server_config = config.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .wrap(build_cors(&server_config))
                .configure(|cfg| configure_routes(cfg, &server_config))
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        actix_rt::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/health", address)).send().await.is_err() {
            actix_rt::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            client,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_form(&self, path: &str, form: Form) -> Response {
        self.client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart request")
    }

    /// Uploads `bytes` as the `image` field of `POST /compress`.
    pub async fn upload(&self, bytes: Vec<u8>, file_name: &str, quality: Option<&str>) -> Response {
        self.post_form("/compress", upload_form(bytes, file_name, quality)).await
    }
}

pub fn upload_form(bytes: Vec<u8>, file_name: &str, quality: Option<&str>) -> Form {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part("image", part);

    match quality {
        Some(q) => form.text("quality", q.to_string()),
        None => form,
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Image Compression Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        max_upload_bytes: 8 * 1024 * 1024,
    }
}
