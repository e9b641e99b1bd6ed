use crate::voter::{resolve, VoterId};

#[derive(Debug, Clone)]
pub struct Caller {
    pub address: String,
    pub voter: VoterId,
}

impl Caller {
    pub fn from_address(address: impl Into<String>) -> Self {
        let address = address.into();
        let voter = resolve(&address);
        Self { address, voter }
    }
}

/// Picks the caller address out of proxy headers, falling back to the peer.
pub fn caller_address(real_ip: Option<&str>, forwarded_for: Option<&str>, peer: Option<String>) -> String {
    real_ip
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .or_else(|| {
            forwarded_for
                .and_then(|list| list.split(',').next())
                .map(str::trim)
                .filter(|ip| !ip.is_empty())
        })
        .map(str::to_string)
        .or(peer)
        .unwrap_or_default()
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for Caller {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let address = caller_address(
                headers.get_one("X-Real-IP"),
                headers.get_one("X-Forwarded-For"),
                req.remote().map(|addr| addr.ip().to_string()),
            );

            Outcome::Success(Caller::from_address(address))
        }
    }
}
