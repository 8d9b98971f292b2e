//! 单页界面

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>📘 Study Notes Generator</title>
<style>
  body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
  nav button { margin-right: .5rem; }
  section { display: none; }
  section.active { display: block; }
  .warning { color: #a66300; }
  .error { color: #b00020; }
  .success { color: #1b7f3a; }
</style>
</head>
<body>
<h1>🎓 Personalized Study Assistant</h1>
<nav>
  <button data-target="home">Home</button>
  <button data-target="notes">📄 Generate Notes</button>
  <button data-target="quiz">🧠 Take Quiz</button>
  <button data-target="settings">⚙️ Settings</button>
</nav>

<section id="home" class="active">
  <h2>📚 Welcome!</h2>
  <p>Boost your learning with auto-generated notes and quizzes based on any topic!</p>
</section>

<section id="notes">
  <h2>📝 Study Notes Generator</h2>
  <input id="notes-topic" placeholder="Enter a topic for notes:">
  <button id="notes-generate">Generate Notes</button>
  <p id="notes-status"></p>
  <div id="notes-output"></div>
</section>

<section id="quiz">
  <h2>🎯 Topic-Based Quiz</h2>
  <input id="quiz-topic" placeholder="Enter a topic for quiz:">
  <button id="quiz-generate">Generate Quiz</button>
  <p id="quiz-status"></p>
  <div id="quiz-card" hidden>
    <p><strong>Question:</strong> <span id="quiz-question"></span></p>
    <div id="quiz-options"></div>
    <button id="quiz-submit">Submit Answer</button>
    <p id="quiz-result"></p>
  </div>
</section>

<section id="settings">
  <h2>⚙️ Learning Preferences</h2>
  <label>Preferred Subject
    <select id="pref-subject">
      <option>Math</option><option>Science</option><option>History</option>
      <option>Computer Science</option><option>English</option>
    </select>
  </label>
  <fieldset id="pref-style">
    <legend>Learning Style</legend>
    <label><input type="radio" name="style" value="Visual" checked> Visual</label>
    <label><input type="radio" name="style" value="Auditory"> Auditory</label>
    <label><input type="radio" name="style" value="Reading/Writing"> Reading/Writing</label>
    <label><input type="radio" name="style" value="Kinesthetic"> Kinesthetic</label>
  </fieldset>
  <label>Daily Study Goal (minutes): <input id="pref-goal" type="range" min="10" max="180" value="30"></label>
  <span id="pref-goal-value">30</span>
  <button id="pref-save">Save Preferences</button>
  <p id="pref-status"></p>
</section>

<script>
let sessionId = null;
const $ = (id) => document.getElementById(id);

document.querySelectorAll("nav button").forEach((button) => {
  button.addEventListener("click", () => {
    document.querySelectorAll("section").forEach((s) => s.classList.remove("active"));
    $(button.dataset.target).classList.add("active");
  });
});

function show(el, text, kind) {
  el.textContent = text;
  el.className = kind || "";
}

async function post(url, body) {
  const response = await fetch(url, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  const data = await response.json().catch(() => ({}));
  return { ok: response.ok, data };
}

$("notes-generate").addEventListener("click", async () => {
  const topic = $("notes-topic").value;
  if (!topic.trim()) {
    show($("notes-status"), "⚠️ Please enter a topic to generate notes.", "warning");
    return;
  }
  show($("notes-status"), "Generating your notes...");
  $("notes-output").textContent = "";
  const { ok, data } = await post("/api/notes", { topic });
  if (ok) {
    show($("notes-status"), "📖 Your Notes:");
    $("notes-output").innerHTML = data.notes_html;
  } else {
    show($("notes-status"), "❌ " + data.error, "error");
  }
});

$("quiz-generate").addEventListener("click", async () => {
  const topic = $("quiz-topic").value;
  if (!topic.trim()) {
    show($("quiz-status"), "⚠️ Please enter a topic.", "warning");
    return;
  }
  show($("quiz-status"), "Generating your quiz...");
  const { ok, data } = await post("/api/quiz", { session_id: sessionId, topic });
  if (!ok) {
    show($("quiz-status"), "❌ " + data.error, "error");
    return;
  }
  sessionId = data.session_id;
  show($("quiz-status"), "");
  $("quiz-question").textContent = data.question;
  const options = $("quiz-options");
  options.innerHTML = "";
  ["A", "B", "C", "D"].forEach((letter, i) => {
    const label = document.createElement("label");
    const radio = document.createElement("input");
    radio.type = "radio";
    radio.name = "answer";
    radio.value = letter;
    radio.checked = i === 0;
    label.appendChild(radio);
    label.appendChild(document.createTextNode(` ${letter}. ${data.options[letter]}`));
    options.appendChild(label);
    options.appendChild(document.createElement("br"));
  });
  show($("quiz-result"), "");
  $("quiz-card").hidden = false;
});

$("quiz-submit").addEventListener("click", async () => {
  const letter = document.querySelector("input[name=answer]:checked").value;
  const { ok, data } = await post("/api/quiz/answer", { session_id: sessionId, letter });
  if (!ok && data.session_expired) {
    sessionId = null;
    $("quiz-card").hidden = true;
    show($("quiz-status"), data.error, "warning");
  } else if (!ok) {
    show($("quiz-result"), data.error, "warning");
  } else if (data.correct) {
    show($("quiz-result"), "✅ Correct Answer!", "success");
  } else {
    show($("quiz-result"), `❌ Incorrect. Correct answer is ${data.correct_letter}: ${data.correct_text ?? ""}`, "error");
  }
});

$("pref-goal").addEventListener("input", () => {
  $("pref-goal-value").textContent = $("pref-goal").value;
});

$("pref-save").addEventListener("click", async () => {
  const preferences = {
    subject: $("pref-subject").value,
    style: document.querySelector("input[name=style]:checked").value,
    daily_goal_minutes: Number($("pref-goal").value),
  };
  const { ok, data } = await post("/api/settings", { session_id: sessionId, preferences });
  if (ok) {
    sessionId = data.session_id;
    show($("pref-status"), "✅ " + data.message, "success");
  } else {
    show($("pref-status"), "❌ " + data.error, "error");
  }
});
</script>
</body>
</html>
"#;
