//! Built-in corpus installed the first time a knowledge slot is empty.
//!
//! Only consulted when nothing has been persisted yet; a loaded corpus is
//! never re-merged with these entries.

use super::KnowledgeEntry;

const SEED: &[(&[&str], &str)] = &[
    (&["oi", "ola", "quem", "voce", "e"],
     "Olá! Eu sou seu assistente de IA pessoal do Gerador YouTube. Estou aqui para ajudar você a criar imagens e vídeos incríveis. Como posso ajudar?"),
    (&["o", "que", "faz", "voce"],
     "Eu posso te ajudar a usar o aplicativo, dar dicas de como escrever bons prompts, explicar funcionalidades e tirar suas dúvidas sobre o app e também sobre programação. Pergunte o que quiser!"),
    (&["offline", "funciona"],
     "Sim! Eu funciono offline usando o conhecimento que já aprendi. Se você me perguntar algo novo enquanto estiver online, eu aprenderei a resposta e a salvarei para o futuro."),
    (&["criar", "imagem", "gerar"],
     "Para criar uma imagem, vá para a aba 'Criar', escreva sua ideia no campo de texto, escolha uma função (como 'Prompt' ou 'Adesivo'), ajuste a proporção e as variações, e clique em 'Gerar Imagem'."),
    (&["editar", "foto", "manipular"],
     "Para editar, vá para a aba 'Editar', envie uma imagem, descreva a alteração que você quer fazer (ex: 'adicione um chapéu de sol') e clique em 'Gerar Imagem'."),
    (&["video", "fazer", "gerar"],
     "Para gerar vídeos, selecione a aba 'Vídeo', descreva a cena que você imagina e clique em 'Gerar Vídeo'. O app sempre criará duas variações para você escolher."),
    (&["variacoes", "que", "sao"],
     "Variações são diferentes resultados gerados a partir do mesmo prompt. Isso te dá mais opções criativas para escolher a que mais gosta."),
    (&["proporcao", "aspect", "ratio", "mudar"],
     "A proporção (ou aspect ratio) define o formato da sua imagem. '16:9' é ideal para thumbnails (paisagem), '9:16' para stories (retrato) e '1:1' é um quadrado perfeito."),
    (&["referencia", "imagem"],
     "Usar uma imagem de referência no modo 'Criar' permite que a IA se inspire no estilo, cores e composição da sua imagem para criar algo totalmente novo, mas com uma vibe parecida."),
    (&["adulto", "desbloquear", "codigo"],
     "O modo adulto permite gerar conteúdo para maiores de 18 anos. Para desbloquear, você precisa de um código de acesso especial. Ele existe para proteger usuários mais jovens."),
    (&["unir", "imagens", "duas"],
     "A função 'Unir' no modo 'Editar' permite combinar duas imagens. Você precisa enviar duas fotos e descrever como elas devem ser mescladas."),
    (&["dicas", "prompt", "bom", "escrever"],
     "Para um bom prompt, seja descritivo! Use adjetivos, especifique o estilo (ex: 'foto realista', 'desenho animado'), o ambiente e a iluminação. Ex: 'Um gato astronauta flutuando no espaço, com nebulosas coloridas ao fundo, estilo arte digital'."),
    (&["erro", "falhou", "nao", "gerou"],
     "Se a geração falhar, tente simplificar seu prompt. Às vezes, prompts muito complexos ou ambíguos podem causar erros. Verifique também sua conexão com a internet."),
    (&["demorando", "video", "lento"],
     "A geração de vídeo é um processo complexo e pode levar alguns minutos. Por favor, aguarde enquanto a IA trabalha na sua criação. O app te manterá informado sobre o status."),
    (&["api", "o", "que", "e"],
     "Uma API (Application Programming Interface) é um conjunto de regras que permite que diferentes aplicativos \"conversem\" entre si. É como um garçom que pega seu pedido (requisição) e o leva para a cozinha (servidor), trazendo a resposta de volta para você."),
    (&["json", "o", "que", "e"],
     "JSON (JavaScript Object Notation) é um formato de texto leve para troca de dados. É fácil para humanos lerem e para máquinas analisarem. Pense nele como uma forma universal de organizar informações com chaves e valores, como um dicionário."),
    (&["html", "o", "que", "e"],
     "HTML (HyperText Markup Language) é a linguagem de marcação padrão para criar páginas web. É o \"esqueleto\" de um site, definindo a estrutura do conteúdo com elementos como títulos, parágrafos e links."),
    (&["div", "p", "h1", "tags", "html"],
     "Tags HTML são os blocos de construção de uma página. `<h1>` é um título principal, `<p>` é um parágrafo e `<div>` é um contêiner genérico usado para agrupar outros elementos e aplicar estilos."),
    (&["css", "o", "que", "e", "estilo"],
     "CSS (Cascading Style Sheets) é a linguagem que usamos para estilizar uma página HTML. É o que dá cor, define fontes, layouts e torna o site visualmente atraente. É a \"roupa\" do esqueleto HTML."),
    (&["flexbox", "grid", "css"],
     "Flexbox e Grid são sistemas de layout em CSS para organizar elementos na página. Flexbox é ideal para layouts em uma dimensão (uma linha ou uma coluna), enquanto o Grid é mais poderoso para layouts em duas dimensões (linhas e colunas)."),
    (&["javascript", "js", "o", "que", "e"],
     "JavaScript (ou JS) é uma linguagem de programação que torna as páginas web interativas. Ela permite criar animações, responder a cliques de botões, buscar dados e muito mais. É o \"cérebro\" que dá vida à página."),
    (&["variavel", "const", "let", "javascript"],
     "Em JavaScript, `let` e `const` são usadas para declarar variáveis (recipientes para armazenar dados). Use `let` para valores que podem mudar e `const` para valores que não mudarão (constantes)."),
    (&["funcao", "function", "javascript"],
     "Uma função em JavaScript é um bloco de código projetado para executar uma tarefa específica. Ela pode ser chamada (invocada) várias vezes, ajudando a organizar e reutilizar o código."),
    (&["react", "o", "que", "e"],
     "React é uma biblioteca JavaScript para construir interfaces de usuário, especialmente \"Single Page Applications\" (SPAs). Ele permite criar componentes de UI reutilizáveis que gerenciam seu próprio estado."),
    (&["componente", "react"],
     "Em React, um componente é uma peça de UI independente e reutilizável. Pense em uma página web dividida em blocos: um botão, um formulário, um cabeçalho... cada um pode ser um componente."),
    (&["jsx", "react", "o", "que", "e"],
     "JSX (JavaScript XML) é uma extensão de sintaxe para JavaScript que se parece muito com HTML. Ele permite que você escreva a estrutura da sua UI diretamente no código JavaScript, tornando os componentes React mais fáceis de ler e escrever."),
    (&["estado", "state", "usestate", "react"],
     "O \"estado\" (state) em React é um objeto que armazena dados que podem mudar ao longo do tempo em um componente. Quando o estado muda, o React re-renderiza o componente para refletir essa mudança. O hook `useState` é a forma padrão de adicionar estado a um componente."),
];

/// The seed corpus, in its fixed order.
pub fn corpus() -> Vec<KnowledgeEntry> {
    SEED.iter()
        .map(|(keywords, response)| KnowledgeEntry::new(keywords.iter().copied(), *response))
        .collect()
}
