use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use once_cell::sync::Lazy;

use bce_auth_v1::{Credential, RequestSigner, StaticCredentialProvider};
use bce_core::{Context, SignRequest, Signer};

criterion_group!(benches, bench);
criterion_main!(benches);

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

fn parts() -> http::request::Parts {
    http::Request::put("http://vcr.bj.baidubce.com/v1/text?source=bos%3A%2F%2Fbucket%2Fa.txt")
        .header("content-type", "application/json")
        .header("content-length", "22")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bce_auth_v1");

    group.bench_function("sign_request", |b| {
        let cred = Credential::new("access_key_id", "secret_access_key");
        let s = RequestSigner::new();
        let ctx = Context::new();

        b.to_async(&*RUNTIME).iter(|| async {
            let mut parts = parts();
            s.sign_request(&ctx, &mut parts, Some(&cred), None)
                .await
                .expect("must success")
        })
    });

    group.bench_function("signer", |b| {
        let signer = Signer::new(
            Context::new(),
            StaticCredentialProvider::new("access_key_id", "secret_access_key"),
            RequestSigner::new(),
        );

        b.to_async(&*RUNTIME).iter(|| async {
            let mut parts = parts();
            signer.sign(&mut parts, None).await.expect("must success")
        })
    });

    group.finish();
}
