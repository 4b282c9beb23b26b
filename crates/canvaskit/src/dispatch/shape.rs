//! Decode target shapes
//!
//! A shape tells the dispatcher what a response body should become. The
//! shape is a type parameter only; no value of it is ever built.

use std::marker::PhantomData;

use canvaskit_transport::HttpResponse;
use http::StatusCode;

use crate::aggregate::aggregate_errors;
use crate::decode::FromResource;
use crate::document::{Document, GENERIC_FAILURE};
use crate::error::{Error, Result};
use crate::json::JsonValue;

/// The caller-declared decode target of a request.
pub trait Shape: Send + 'static {
    /// What a successful response decodes to.
    type Output: Send + 'static;

    /// Turn a received response into the output.
    fn from_response(response: &HttpResponse) -> Result<Self::Output>;
}

/// One resource of type `T`.
pub struct Single<T>(PhantomData<fn() -> T>);

/// An ordered collection of `T`, decoded all-or-nothing.
pub struct Collection<T>(PhantomData<fn() -> T>);

/// Success once a response arrives; the body is ignored.
pub struct Empty;

/// Success only on `201 Created`.
pub struct Created;

impl<T> Shape for Single<T>
where
    T: FromResource + Send + 'static,
{
    type Output = T;

    fn from_response(response: &HttpResponse) -> Result<T> {
        Document::parse(&response.body)?.decode_one()
    }
}

impl<T> Shape for Collection<T>
where
    T: FromResource + Send + 'static,
{
    type Output = Vec<T>;

    fn from_response(response: &HttpResponse) -> Result<Vec<T>> {
        Document::parse(&response.body)?.decode_many()
    }
}

impl Shape for Empty {
    type Output = ();

    fn from_response(_response: &HttpResponse) -> Result<()> {
        Ok(())
    }
}

impl Shape for Created {
    type Output = ();

    fn from_response(response: &HttpResponse) -> Result<()> {
        if response.status == StatusCode::CREATED {
            return Ok(());
        }

        let message = serde_json::from_slice::<JsonValue>(&response.body)
            .ok()
            .and_then(|body| {
                body.get("errors")
                    .and_then(JsonValue::as_array)
                    .and_then(|errors| aggregate_errors(errors))
            })
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Err(Error::ServerError(message))
    }
}
