use std::net::{Ipv4Addr, SocketAddr};

use repository::Repository;
use tokio::net::TcpListener;
use util::{load_env, require};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let secrets = load_env()?;

    // startup precondition; connecting lazily would only defer the failure
    let conn_string = require(&secrets, "DATABASE_URL")?;
    let repository = Repository::new(conn_string).await?;

    let access_key_id = require(&secrets, "AWS_ACCESS_KEY_ID")?;
    let secret_access_key = require(&secrets, "AWS_SECRET_ACCESS_KEY")?;
    let aws_url = require(&secrets, "AWS_URL")?;
    let bucket = require(&secrets, "BUCKET")?;

    let credentials = aws_sdk_s3::config::Credentials::new(
        access_key_id,
        secret_access_key,
        None,
        None,
        "",
    );
    let cfg = aws_config::from_env()
        .endpoint_url(aws_url)
        .region("auto")
        .credentials_provider(credentials)
        .load()
        .await;
    let s3 = aws_sdk_s3::Client::new(&cfg);

    let router =
        api::serve(repository, s3, bucket.to_string(), "Config.toml").await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
