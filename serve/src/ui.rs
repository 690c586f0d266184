//! Embedded chat page: one input, a model selector, and the transcript.
//!
//! The page keeps the chat history client-side and sends it with every
//! request; only the answer text is rendered (the source url stays in the
//! payload).

pub(crate) const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Chatbot</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
  #controls { display: flex; gap: 1rem; align-items: center; margin-bottom: 1rem; }
  #cost { color: #555; font-size: 0.85rem; }
  #log { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; min-height: 16rem; }
  .turn { margin: 0.5rem 0; white-space: pre-wrap; }
  .turn.user { font-weight: 600; }
  .turn.pending { color: #888; }
  form { display: flex; gap: 0.5rem; margin-top: 1rem; }
  #message { flex: 1; padding: 0.5rem; }
</style>
</head>
<body>
<h1>Chatbot</h1>
<div id="controls">
  <label>Select Model
    <select id="model"></select>
  </label>
  <span id="cost"></span>
</div>
<div id="log"></div>
<form id="chat-form">
  <input id="message" autocomplete="off" placeholder="Ask something...">
  <button type="submit">Send</button>
</form>
<script>
const history = [];
const modelSelect = document.getElementById('model');
const costLine = document.getElementById('cost');
const log = document.getElementById('log');
const form = document.getElementById('chat-form');
const input = document.getElementById('message');
let models = [];

function appendTurn(cls, text) {
  const div = document.createElement('div');
  div.className = 'turn ' + cls;
  div.textContent = text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
  return div;
}

function updateCost() {
  const model = models.find(m => m.id === modelSelect.value);
  costLine.textContent = model ? model.cost_line : '';
}

async function loadModels() {
  const res = await fetch('/api/models');
  models = await res.json();
  for (const model of models) {
    const option = document.createElement('option');
    option.value = model.id;
    option.textContent = model.display_name;
    option.selected = model.default;
    modelSelect.appendChild(option);
  }
  updateCost();
}
modelSelect.addEventListener('change', updateCost);

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const message = input.value.trim();
  if (!message) return;
  input.value = '';
  appendTurn('user', message);
  const pending = appendTurn('pending', '...');
  try {
    const res = await fetch('/api/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ message, history, model: modelSelect.value }),
    });
    if (!res.ok) {
      pending.textContent = 'error: ' + await res.text();
      pending.className = 'turn';
      return;
    }
    const out = await res.json();
    pending.textContent = out.answer;
    pending.className = 'turn';
    history.push({ role: 'user', content: message });
    history.push({ role: 'assistant', content: out.answer });
  } catch (err) {
    pending.textContent = 'error: ' + err;
    pending.className = 'turn';
  }
});

loadModels();
</script>
</body>
</html>
"#;
