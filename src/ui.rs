pub fn render_index(date: &str, habit_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &habit_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ea;
      --bg-2: #c9e4c5;
      --ink: #2b2a28;
      --accent: #3f8f5b;
      --accent-2: #2f4858;
      --warn: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1dc 60%, #f4f8f1 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form.new-habit {
      display: grid;
      grid-template-columns: 1fr 120px auto;
      gap: 12px;
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      padding: 12px 14px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: var(--accent-2);
    }

    button.danger {
      background: var(--warn);
    }

    ul.habits {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 14px;
    }

    .habit {
      background: white;
      border-radius: 20px;
      padding: 16px 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .habit.done {
      border-color: var(--accent);
    }

    .habit .meta {
      color: #6f6a65;
      font-size: 0.9rem;
    }

    .habit .buttons {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .history {
      font-size: 0.9rem;
      color: #5f5c57;
    }

    .history .latest {
      font-weight: 600;
      color: var(--accent);
    }

    .status {
      min-height: 1.2em;
      color: #6b645d;
    }

    .status[data-type="error"] {
      color: var(--warn);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      form.new-habit {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Today is <span id="date">{{DATE}}</span>. Tracking <span id="count">{{COUNT}}</span> habits.</p>
    </header>

    <section class="panel">
      <div class="stat"><span class="label">Targets reached</span><span id="completed" class="value">0</span></div>
      <div class="stat"><span class="label">Broken streaks</span><span id="broken" class="value">0</span></div>
      <div class="stat"><span class="label">Active streaks</span><span id="active" class="value">0</span></div>
      <div class="stat"><span class="label">Best streak</span><span id="best" class="value">0</span></div>
    </section>

    <form id="new-habit" class="new-habit">
      <input id="name" name="name" placeholder="New habit" required />
      <input id="target" name="targetStreak" type="number" min="1" max="32" value="7" required />
      <button type="submit">Add habit</button>
    </form>

    <div id="status" class="status" role="status"></div>

    <ul id="habits" class="habits"></ul>
  </main>

  <script>
    const today = document.getElementById('date').textContent;
    const list = document.getElementById('habits');
    const statusEl = document.getElementById('status');

    const outcomeText = {
      already_completed_today: 'Already completed today.',
      streak_broken: 'Streak broken, starting again from 1.',
      streak_continued: 'Streak continued!',
      target_reached: 'Target reached!',
    };

    const setStatus = (message, type = '') => {
      statusEl.textContent = message;
      statusEl.dataset.type = type;
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'Content-Type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined,
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.status === 204 ? null : res.json();
    };

    const loadStats = async () => {
      const stats = await request('GET', '/api/stats');
      document.getElementById('completed').textContent = stats.completedHabits;
      document.getElementById('broken').textContent = stats.brokenStreaks;
      document.getElementById('active').textContent = stats.activeStreaks;
      document.getElementById('best').textContent = stats.bestStreak;
      document.getElementById('count').textContent = stats.habitCount;
    };

    const showHistory = async (habit, container) => {
      const entries = await request('GET', `/api/habits/${habit.id}/history`);
      if (entries.length === 0) {
        container.textContent = 'No completions yet.';
        return;
      }
      container.innerHTML = entries
        .map((entry) => `<span class="${entry.latest ? 'latest' : ''}">${entry.date}</span>`)
        .join(', ');
    };

    const renderHabit = (habit) => {
      const item = document.createElement('li');
      item.className = habit.completionDates.includes(today) ? 'habit done' : 'habit';

      const title = document.createElement('strong');
      title.textContent = habit.name;

      const meta = document.createElement('div');
      meta.className = 'meta';
      meta.textContent = `Streak ${habit.currentStreak}/${habit.targetStreak} · best ${habit.longestStreak} · targets reached ${habit.totalCompletions}`;

      const history = document.createElement('div');
      history.className = 'history';

      const buttons = document.createElement('div');
      buttons.className = 'buttons';
      const addButton = (label, className, handler) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.textContent = label;
        if (className) {
          button.className = className;
        }
        button.addEventListener('click', () => handler().catch((err) => setStatus(err.message, 'error')));
        buttons.appendChild(button);
      };

      addButton('Done today', '', async () => {
        const result = await request('POST', `/api/habits/${habit.id}/complete`);
        setStatus(`${habit.name}: ${outcomeText[result.outcome]}`, result.outcome === 'streak_broken' ? 'error' : 'ok');
        await refresh();
      });
      addButton('History', 'secondary', () => showHistory(habit, history));
      addButton('Edit', 'secondary', async () => {
        const name = prompt('Habit name', habit.name);
        if (name === null) {
          return;
        }
        const target = prompt('Target streak (1-32)', habit.targetStreak);
        if (target === null) {
          return;
        }
        await request('PUT', `/api/habits/${habit.id}`, { name, targetStreak: Number(target) });
        setStatus('Habit updated.', 'ok');
        await refresh();
      });
      addButton('Delete', 'danger', async () => {
        if (!confirm(`Delete "${habit.name}"?`)) {
          return;
        }
        await request('DELETE', `/api/habits/${habit.id}`);
        setStatus('Habit deleted.', 'ok');
        await refresh();
      });

      item.append(title, meta, buttons, history);
      return item;
    };

    const refresh = async () => {
      const habits = await request('GET', '/api/habits');
      list.replaceChildren(...habits.map(renderHabit));
      await loadStats();
    };

    document.getElementById('new-habit').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = event.target;
      const data = new FormData(form);
      try {
        await request('POST', '/api/habits', {
          name: data.get('name'),
          targetStreak: Number(data.get('targetStreak')),
        });
        form.reset();
        setStatus('Habit added.', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
