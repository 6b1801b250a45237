use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, Notify};

use crate::analysis::{self, risk, Fingerprinter};
use crate::config::Config;
use crate::external;
use crate::generators::{brute, js_scraper, mutator, recursive};
use crate::model::{Candidate, Finding, Status, WildcardBaseline};
use crate::passive::{self, PassiveSource};
use crate::probe::{HttpThrottle, Prober};
use crate::resolver::Resolver;
use crate::wildcard;

/// Run totals, reported at drain time and on interrupt as partial statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub total_candidates: usize,
    pub processed: usize,
    pub success: usize,
    pub errors: usize,
}

/// Owns every run-scoped piece of shared mutable state: the work queue, the
/// processed-candidate set, the fingerprint set, the wildcard baseline, and
/// the accumulated findings. Workers touch these only through the narrow
/// interfaces below.
pub struct Pipeline {
    config: Config,
    resolver: Resolver,
    prober: Arc<Prober>,
    throttle: Arc<HttpThrottle>,
    fingerprinter: Arc<Fingerprinter>,
    passive_sources: Vec<Box<dyn PassiveSource>>,
    findings: Arc<Mutex<Vec<Finding>>>,
    processed_count: Arc<AtomicUsize>,
    success_count: Arc<AtomicUsize>,
    error_count: Arc<AtomicUsize>,
    outstanding: Arc<AtomicI64>,
    drained: Arc<Notify>,
}

impl Pipeline {
    pub fn new(config: Config, client: reqwest::Client) -> anyhow::Result<Self> {
        let resolver = Resolver::new(&config.nameservers)?;
        let prober = Arc::new(Prober::new(client, config.http_timeout_secs));
        let throttle = Arc::new(HttpThrottle::new(config.http_semaphore_permits()));
        Ok(Self {
            resolver,
            prober,
            throttle,
            fingerprinter: Arc::new(Fingerprinter::new()),
            passive_sources: passive::all_sources(),
            findings: Arc::new(Mutex::new(Vec::new())),
            processed_count: Arc::new(AtomicUsize::new(0)),
            success_count: Arc::new(AtomicUsize::new(0)),
            error_count: Arc::new(AtomicUsize::new(0)),
            outstanding: Arc::new(AtomicI64::new(0)),
            drained: Arc::new(Notify::new()),
            config,
        })
    }

    /// Runs the full pipeline against `apex`: Phase 0 wildcard detection,
    /// worker-pool startup, the passive/scraped/brute/permuted enqueue
    /// phases, a drain, and an optional recursive-expansion pass. Returns
    /// every finding emitted, sorted by score descending (ties broken by
    /// domain) and the run's statistics -- truncated but valid even if the
    /// run was interrupted.
    pub async fn run(&self, apex: &str) -> anyhow::Result<(Vec<Finding>, Stats)> {
        tracing::info!(apex, concurrency = self.config.concurrency, "starting scan");

        tracing::info!("phase 0: wildcard detection");
        let baseline = Arc::new(wildcard::detect(&self.resolver, &self.prober, apex).await);
        if baseline.ips.is_empty() {
            tracing::info!("no wildcard DNS detected");
        } else {
            tracing::warn!(ips = ?baseline.ips, signatures = baseline.signatures.len(), "wildcard DNS detected");
        }

        let (tx, rx) = mpsc::unbounded_channel::<Candidate>();
        let rx = Arc::new(tokio::sync::Mutex::new(rx));

        let workers: Vec<_> = (0..self.config.concurrency)
            .map(|_| self.spawn_worker(rx.clone(), baseline.clone()))
            .collect();

        let mut enqueued = HashSet::new();
        self.enqueue_phase("passive", &tx, &mut enqueued, self.collect_passive(apex).await);

        tracing::info!("phase 1.5: js scraping");
        let js_subs = js_scraper::scrape(self.prober_client(), apex).await;
        self.enqueue_phase("js scraping", &tx, &mut enqueued, js_subs);

        tracing::info!("phase 2: brute force");
        let brute_subs = brute::generate_candidates(apex, &self.config.wordlist, std::path::Path::new("."))?;
        self.enqueue_phase("brute force", &tx, &mut enqueued, brute_subs.into_iter().collect());

        if !enqueued.is_empty() {
            tracing::info!("phase 2.5: permutation scanning");
            let perms = mutator::generate_permutations(&enqueued, apex);
            self.enqueue_phase("permutation", &tx, &mut enqueued, perms);
        }

        if self.config.axfr {
            tracing::info!("attempting DNS zone transfer");
            let axfr_subs = external::axfr::attempt_transfer(&self.resolver, apex).await;
            self.enqueue_phase("axfr", &tx, &mut enqueued, axfr_subs);
        }

        tracing::info!(total = enqueued.len(), "total unique candidates queued");

        self.wait_drained().await;
        self.log_stats("scan");

        if self.config.recursive {
            self.run_recursive_phase(apex, &tx, &mut enqueued).await;
            self.wait_drained().await;
            self.log_stats("recursive expansion");
        }

        drop(tx);
        for w in workers {
            let _ = w.await;
        }

        if self.config.nuclei {
            self.run_nuclei_phase().await;
        }

        let mut findings = self.findings.lock().clone();
        findings.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.domain.cmp(&b.domain)));

        let stats = Stats {
            total_candidates: enqueued.len(),
            processed: self.processed_count.load(Ordering::Relaxed),
            success: self.success_count.load(Ordering::Relaxed),
            errors: self.error_count.load(Ordering::Relaxed),
        };
        Ok((findings, stats))
    }

    fn prober_client(&self) -> &reqwest::Client {
        self.prober.client()
    }

    async fn collect_passive(&self, apex: &str) -> HashSet<Candidate> {
        tracing::info!("phase 1: passive discovery");
        let timeout = std::time::Duration::from_secs(self.config.passive_timeout_secs);
        let futures = self.passive_sources.iter().map(|source| {
            let name = source.name();
            async move {
                match tokio::time::timeout(timeout, source.fetch(apex)).await {
                    Ok(Ok(found)) => {
                        tracing::info!(source = name, count = found.len(), "passive source returned results");
                        found
                    }
                    Ok(Err(e)) => {
                        tracing::warn!(source = name, error = %e, "passive source failed");
                        HashSet::new()
                    }
                    Err(_) => {
                        tracing::warn!(source = name, "passive source timed out");
                        HashSet::new()
                    }
                }
            }
        });
        let results = futures::future::join_all(futures).await;
        results.into_iter().flatten().collect()
    }

    async fn run_recursive_phase(
        &self,
        apex: &str,
        tx: &mpsc::UnboundedSender<Candidate>,
        enqueued: &mut HashSet<Candidate>,
    ) {
        let live: HashSet<Candidate> = self.findings.lock().iter().map(|f| f.domain.clone()).collect();
        if live.is_empty() {
            return;
        }
        tracing::info!("phase 4: recursive enumeration (depth {})", self.config.max_recursion_depth);
        let recursive_subs =
            recursive::enumerate_recursive(&self.passive_sources, &live, apex, self.config.max_recursion_depth).await;
        let fresh: HashSet<Candidate> = recursive_subs.difference(&live).cloned().collect();
        self.enqueue_phase("recursive enumeration", tx, enqueued, fresh);
    }

    async fn run_nuclei_phase(&self) {
        let live: Vec<Candidate> = self.findings.lock().iter().map(|f| f.domain.clone()).collect();
        if live.is_empty() {
            return;
        }
        tracing::info!(count = live.len(), "phase 5: nuclei vulnerability scanning");
        match which::which("nuclei") {
            Ok(bin) => {
                let bin = bin.to_string_lossy().to_string();
                match external::nuclei::scan_targets(&bin, "nuclei-templates", &live).await {
                    Ok(vulns) => tracing::info!(count = vulns.len(), "nuclei scan complete"),
                    Err(e) => tracing::warn!(error = %e, "nuclei scan failed"),
                }
            }
            Err(_) => tracing::warn!("nuclei not installed, skipping vulnerability scan"),
        }
    }

    fn enqueue_phase(
        &self,
        phase: &str,
        tx: &mpsc::UnboundedSender<Candidate>,
        enqueued: &mut HashSet<Candidate>,
        candidates: HashSet<Candidate>,
    ) {
        let mut added = 0usize;
        for candidate in candidates {
            if enqueued.insert(candidate.clone()) {
                self.outstanding.fetch_add(1, Ordering::SeqCst);
                if tx.send(candidate).is_ok() {
                    added += 1;
                }
            }
        }
        tracing::info!(phase, added, "enqueued candidates");
    }

    async fn wait_drained(&self) {
        loop {
            // Register interest before re-checking so a worker's notification
            // landing between the check and the wait is never missed.
            let notified = self.drained.notified();
            if self.outstanding.load(Ordering::SeqCst) <= 0 {
                return;
            }
            notified.await;
        }
    }

    fn log_stats(&self, label: &str) {
        tracing::info!(
            label,
            processed = self.processed_count.load(Ordering::Relaxed),
            live = self.success_count.load(Ordering::Relaxed),
            errors = self.error_count.load(Ordering::Relaxed),
            "stats"
        );
    }

    fn spawn_worker(
        &self,
        rx: Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<Candidate>>>,
        baseline: Arc<WildcardBaseline>,
    ) -> tokio::task::JoinHandle<()> {
        let resolver = self.resolver.clone();
        let prober = self.prober.clone();
        let throttle = self.throttle.clone();
        let fingerprinter = self.fingerprinter.clone();
        let findings = self.findings.clone();
        let processed_count = self.processed_count.clone();
        let success_count = self.success_count.clone();
        let error_count = self.error_count.clone();
        let outstanding = self.outstanding.clone();
        let drained = self.drained.clone();

        tokio::spawn(async move {
            loop {
                let candidate = {
                    let mut guard = rx.lock().await;
                    guard.recv().await
                };
                let Some(candidate) = candidate else { break };

                let outcome = process_candidate(&resolver, &prober, &throttle, &fingerprinter, &baseline, &candidate).await;
                match outcome {
                    Ok(Some(finding)) => {
                        success_count.fetch_add(1, Ordering::Relaxed);
                        findings.lock().push(finding);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error_count.fetch_add(1, Ordering::Relaxed);
                        tracing::debug!(candidate, error = %e, "worker error");
                    }
                }

                processed_count.fetch_add(1, Ordering::Relaxed);
                if outstanding.fetch_sub(1, Ordering::SeqCst) <= 1 {
                    drained.notify_waiters();
                }
            }
        })
    }
}

/// Resolve -> filter -> probe -> filter -> score chain for a single
/// candidate. Returns `Ok(None)` for any candidate dropped by an analysis
/// filter; never returns `Err` for an ordinary DNS/HTTP failure, only for
/// unexpected internal errors.
async fn process_candidate(
    resolver: &Resolver,
    prober: &Prober,
    throttle: &HttpThrottle,
    fingerprinter: &Fingerprinter,
    baseline: &WildcardBaseline,
    candidate: &str,
) -> anyhow::Result<Option<Finding>> {
    let resolution = resolver.resolve(candidate).await;

    if analysis::is_private_ip(&resolution.ip) {
        return Ok(None);
    }
    if resolution.status != Status::Live {
        return Ok(None);
    }
    if baseline.is_wildcard_ip(&resolution.ip) {
        return Ok(None);
    }

    let probe = {
        let _permit = throttle.acquire().await;
        prober.probe(candidate).await
    };

    if baseline.matches(probe.status, &probe.title, probe.content_length, &probe.tags) {
        return Ok(None);
    }

    let content_hash = Fingerprinter::hash(probe.status, &probe.title, probe.content_length, &probe.body);
    if fingerprinter.is_duplicate(&content_hash) {
        return Ok(None);
    }

    let takeover_service = analysis::check_takeover(&resolution.cname, &probe.body);

    let mut finding = Finding::from_resolution(&resolution);
    finding.http_status = probe.status;
    finding.waf = probe.waf.clone().unwrap_or_default();
    finding.title = probe.title;
    finding.content_length = probe.content_length;
    finding.location = probe.location;

    let (score, reasons) = risk::score(candidate, probe.status, false, takeover_service);
    finding.score = score;
    finding.risk_reasons = reasons;
    if let Some(service) = takeover_service {
        finding.is_takeover = true;
        finding.takeover_service = service.to_string();
    }

    if let Some(waf) = &probe.waf {
        if !finding.provider.is_empty() && finding.provider != "-" {
            if !finding.provider.contains(waf.as_str()) {
                finding.provider = format!("{waf} / {}", finding.provider);
            }
        } else {
            finding.provider = waf.clone();
        }
    }

    Ok(Some(finding))
}
