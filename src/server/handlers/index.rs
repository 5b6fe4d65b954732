//! Info page.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>comanda print server</title>
<style>
body { font-family: monospace; max-width: 40em; margin: 2em auto; }
code { background: #eee; padding: 0 .3em; }
.ok { color: green; }
.err { color: red; }
</style>
</head>
<body>
<h1>comanda</h1>
<p>ESC/POS receipt print server.</p>

<h2>Printers</h2>
<pre id="printers">Loading printers...</pre>

<h2>Test print</h2>
<p><input id="key" type="password" placeholder="X-API-KEY (if configured)">
<button onclick="testPrint()">Print test receipt</button></p>
<p id="result"></p>

<h2>API</h2>
<ul>
<li><code>GET /printers</code> list printers</li>
<li><code>POST /print</code> print <code>{"content": [...], "variant": "customer"|"kitchen", "printer": "..."}</code></li>
<li><code>POST /render</code> return the compiled bytes without printing</li>
<li><code>POST /test-print</code> print a test receipt</li>
</ul>
<p>Send <code>X-API-KEY</code> when the server has an API key configured.</p>

<script>
fetch('/printers')
  .then(r => r.json())
  .then(d => { document.getElementById('printers').textContent = d.printers.join('\n') || '(none)'; })
  .catch(e => { document.getElementById('printers').textContent = 'Error: ' + e; });

function testPrint() {
  const result = document.getElementById('result');
  result.className = '';
  result.textContent = 'Sending test print...';
  fetch('/test-print', {
    method: 'POST',
    headers: { 'X-API-KEY': document.getElementById('key').value }
  })
    .then(r => r.json())
    .then(d => {
      result.className = d.success ? 'ok' : 'err';
      result.textContent = d.success ? d.message : 'Error: ' + d.error;
    })
    .catch(e => { result.className = 'err'; result.textContent = 'Error: ' + e; });
}
</script>
</body>
</html>
"#;

/// Handle GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
