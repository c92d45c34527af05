use actix_web::{HttpResponse, Responder};

use crate::use_cases::resources::describe_resources;

pub async fn get_resources() -> impl Responder {
    HttpResponse::Ok().json(describe_resources())
}
