use web::Demo;

#[tokio::main]
async fn main() {
    sse_demo::run(Demo::Full).await;
}
