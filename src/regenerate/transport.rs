/// Raw reply from the regeneration endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues the regeneration request.
///
/// Implementations send `POST /trip/{trip_id}/day/{day}/regenerate` with a `{}` JSON body and
/// the CSRF token in the `X-CSRFToken` header. An `Err` is a network level failure; any HTTP
/// reply, successful or not, is an `Ok`.
#[allow(async_fn_in_trait)]
pub trait RegenerateTransport {
    async fn post_regenerate(
        &self,
        trip_id: i32,
        day: i32,
        csrf_token: &str,
    ) -> Result<TransportResponse, String>;
}
